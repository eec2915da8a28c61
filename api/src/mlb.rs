/// MLB Stats API raw wire types: serde shapes for deserializing statsapi responses.
/// These map to our clean domain types via the mapping functions in client.rs.
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Schedule  (GET /v1/schedule)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub dates: Option<Vec<ScheduleDate>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleDate {
    pub games: Option<Vec<ScheduleGame>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: u64,
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>, // ISO 8601, UTC
    pub status: Option<ScheduleStatus>,
    pub teams: Option<ScheduleTeams>,
    pub venue: Option<Venue>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleStatus {
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>, // "Scheduled", "In Progress", "Final", "Postponed", ...
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleTeams {
    pub home: Option<ScheduleTeam>,
    pub away: Option<ScheduleTeam>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleTeam {
    pub score: Option<u32>, // absent before first pitch
    pub team: Option<TeamRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TeamRef {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Venue {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Box score  (GET /v1/game/{gamePk}/boxscore)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BoxscoreResponse {
    pub teams: Option<BoxscoreTeams>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoxscoreTeams {
    pub home: Option<BoxscoreTeam>,
    pub away: Option<BoxscoreTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BoxscoreTeam {
    /// Player ids of everyone who batted, in lineup order.
    #[serde(default)]
    pub batters: Vec<u64>,
    /// Keyed "ID{playerId}".
    #[serde(default)]
    pub players: HashMap<String, BoxscorePlayer>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoxscorePlayer {
    pub person: Option<Person>,
    pub stats: Option<PlayerStats>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Person {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerStats {
    pub batting: Option<BattingLine>,
}

/// statsapi sends `"batting": {}` for players who did not bat.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct BattingLine {
    #[serde(rename = "atBats")]
    pub at_bats: Option<u32>,
    pub hits: Option<u32>,
    #[serde(rename = "strikeOuts")]
    pub strike_outs: Option<u32>,
}

impl BattingLine {
    pub fn is_empty(&self) -> bool {
        self.at_bats.is_none() && self.hits.is_none() && self.strike_outs.is_none()
    }
}
