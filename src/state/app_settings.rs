use log::LevelFilter;
use mlb_api::TrackedTeam;

pub const TEAM_ID_VAR: &str = "OFERCLUB_TEAM_ID";
pub const TEAM_NAME_VAR: &str = "OFERCLUB_TEAM_NAME";
pub const LOG_LEVEL_VAR: &str = "OFERCLUB_LOG";

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub team: TrackedTeam,
    /// Values that were set but could not be used, reported once logging is up.
    pub rejected: Vec<String>,
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key → value source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut team = TrackedTeam::default();
        let mut rejected = Vec::new();

        if let Some(raw) = get(TEAM_ID_VAR) {
            match raw.parse::<u32>() {
                Ok(id) if id > 0 => team.id = id,
                _ => rejected.push(format!("ignoring {TEAM_ID_VAR}={raw}: not a positive team id")),
            }
        }
        if let Some(name) = get(TEAM_NAME_VAR) {
            team.name = name;
        }

        let log_level = get(LOG_LEVEL_VAR).and_then(|raw| match raw.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                rejected.push(format!("ignoring {LOG_LEVEL_VAR}={raw}: unknown log level"));
                None
            }
        });

        Self { full_screen: false, log_level, team, rejected }
    }
}
