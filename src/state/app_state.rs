use crate::app::MenuItem;
use crate::state::messages::ReportOutcome;
use chrono::{DateTime, Local};
use mlb_api::ClubReport;

// ---------------------------------------------------------------------------
// Report state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ReportState {
    /// None until the first load finishes.
    pub outcome: Option<ReportOutcome>,
    pub last_updated: Option<DateTime<Local>>,
    /// Row offset shared by both tables.
    pub scroll_offset: u16,
}

impl ReportState {
    pub fn load(&mut self, outcome: ReportOutcome, fetched_at: DateTime<Local>) {
        let game_changed = self.report().map(|r| r.game.game_id)
            != match &outcome {
                ReportOutcome::Ready(r) => Some(r.game.game_id),
                _ => None,
            };
        if game_changed {
            self.scroll_offset = 0;
        }
        self.outcome = Some(outcome);
        self.last_updated = Some(fetched_at);
    }

    pub fn report(&self) -> Option<&ClubReport> {
        match &self.outcome {
            Some(ReportOutcome::Ready(report)) => Some(report),
            _ => None,
        }
    }

    pub fn scroll_down(&mut self) {
        let max = self
            .report()
            .map(|r| r.zero_hit.len().max(r.strikeouts.len()))
            .unwrap_or(0)
            .saturating_sub(1) as u16;
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Text shown in place of the dashboard when there is no report.
    pub fn fallback_message(&self, team_name: &str) -> Option<String> {
        match self.outcome.as_ref()? {
            ReportOutcome::Ready(_) => None,
            ReportOutcome::NoRecentGame => Some(format!(
                "No game data available. The {team_name} may not have played recently.\nPress r to refresh."
            )),
            ReportOutcome::Unavailable(_) => Some(
                "No game data available, try refreshing.\nPress r to refresh.".to_string(),
            ),
        }
    }

    pub fn last_updated_caption(&self) -> Option<String> {
        self.last_updated
            .map(|t| format!("Last updated: {}", t.format("%Y-%m-%d %H:%M:%S")))
    }
}

pub fn empty_club_message(team_name: &str) -> String {
    format!("All {team_name} players got hits in this game! The 0-fer Club is empty.")
}

pub fn no_strikeouts_message(team_name: &str) -> String {
    format!("No {team_name} players struck out in this game!")
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub report: ReportState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use mlb_api::{GameSummary, StrikeoutEntry, ZeroHitEntry};

    fn report(game_id: u64, rows: usize) -> ClubReport {
        ClubReport {
            game: GameSummary {
                game_id,
                date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
                start_time: None,
                venue: "Citi Field".into(),
                is_home: true,
                team_name: "New York Mets".into(),
                team_score: 2,
                opponent: "Atlanta Braves".into(),
                opponent_score: 1,
            },
            zero_hit: (0..rows)
                .map(|i| ZeroHitEntry { name: format!("p{i}"), at_bats: 3, strike_outs: 1 })
                .collect(),
            strikeouts: vec![StrikeoutEntry { name: "p0".into(), strike_outs: 1 }],
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 8, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn nothing_to_say_before_first_load() {
        let state = ReportState::default();
        assert!(state.fallback_message("New York Mets").is_none());
        assert!(state.last_updated_caption().is_none());
    }

    #[test]
    fn no_game_and_unavailable_have_distinct_messages() {
        let mut state = ReportState::default();
        state.load(ReportOutcome::NoRecentGame, noon());
        let no_game = state.fallback_message("New York Mets").unwrap();
        assert!(no_game.contains("may not have played recently"));

        state.load(ReportOutcome::Unavailable("boom".into()), noon());
        let unavailable = state.fallback_message("New York Mets").unwrap();
        assert!(unavailable.contains("try refreshing"));
        assert_ne!(no_game, unavailable);
    }

    #[test]
    fn ready_report_has_no_fallback_and_a_caption() {
        let mut state = ReportState::default();
        state.load(ReportOutcome::Ready(report(1, 2)), noon());
        assert!(state.fallback_message("New York Mets").is_none());
        assert_eq!(state.report().map(|r| r.game.game_id), Some(1));
        assert_eq!(state.last_updated_caption().as_deref(), Some("Last updated: 2024-08-02 12:00:00"));
    }

    #[test]
    fn scrolling_is_bounded_and_resets_on_new_game() {
        let mut state = ReportState::default();
        state.load(ReportOutcome::Ready(report(1, 3)), noon());
        for _ in 0..10 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_offset, 2);

        state.load(ReportOutcome::Ready(report(1, 3)), noon());
        assert_eq!(state.scroll_offset, 2, "same game keeps the offset");

        state.load(ReportOutcome::Ready(report(2, 3)), noon());
        assert_eq!(state.scroll_offset, 0);

        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn empty_table_messages_name_the_team() {
        assert_eq!(
            empty_club_message("New York Mets"),
            "All New York Mets players got hits in this game! The 0-fer Club is empty."
        );
        assert_eq!(no_strikeouts_message("New York Mets"), "No New York Mets players struck out in this game!");
    }
}
