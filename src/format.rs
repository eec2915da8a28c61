use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::New_York;

/// "Thursday, August 01, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}

/// First pitch in US Eastern time, daylight saving included ("7:10 PM EDT").
pub fn format_game_time(start: Option<DateTime<Utc>>) -> String {
    match start {
        Some(dt) => dt.with_timezone(&New_York).format("%-I:%M %p %Z").to_string(),
        None => "TBD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_is_long_form() {
        let d = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(format_date(d), "Thursday, August 01, 2024");
    }

    #[test]
    fn summer_game_uses_daylight_time() {
        let dt = Utc.with_ymd_and_hms(2024, 8, 1, 23, 10, 0).unwrap();
        assert_eq!(format_game_time(Some(dt)), "7:10 PM EDT");
    }

    #[test]
    fn early_season_game_uses_standard_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 18, 5, 0).unwrap();
        assert_eq!(format_game_time(Some(dt)), "1:05 PM EST");
    }

    #[test]
    fn missing_start_time_is_tbd() {
        assert_eq!(format_game_time(None), "TBD");
    }
}
