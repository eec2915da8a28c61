pub mod client;
pub mod mlb;
pub mod selector;
pub mod views;

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the MLB Stats API wire format
// ---------------------------------------------------------------------------

/// The one team this crate tracks. Side resolution matches on `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedTeam {
    pub id: u32,
    pub name: String,
}

impl Default for TrackedTeam {
    fn default() -> Self {
        Self { id: 121, name: "New York Mets".into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Final,
    Postponed,
}

impl GameStatus {
    /// Map the schedule's `detailedState`. Only the exact text "Final" counts
    /// as a completed game.
    pub fn from_detailed_state(state: &str) -> Self {
        match state {
            "Final" => GameStatus::Final,
            "In Progress" | "Manager challenge" | "Delayed" | "Warmup" => GameStatus::InProgress,
            "Postponed" | "Cancelled" | "Suspended" => GameStatus::Postponed,
            _ => GameStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u64,
    /// The calendar date the schedule was queried for.
    pub date: NaiveDate,
    pub start_time: Option<DateTime<Utc>>,
    pub status: GameStatus,
    pub detailed_state: String,
    pub venue: String,
    pub home: TeamScore,
    pub away: TeamScore,
}

impl Game {
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    pub fn team(&self, side: Side) -> &TeamScore {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// Box score flattened from the upstream team → players → stats nesting.
/// `BoxScore::default()` is the empty box score handed out on fetch failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxScore {
    pub home: TeamBatting,
    pub away: TeamBatting,
    /// Both sides' players keyed by numeric player id.
    pub players: HashMap<u64, BoxPlayer>,
}

impl BoxScore {
    pub fn batting(&self, side: Side) -> &TeamBatting {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.home.batting_order.is_empty()
            && self.away.batting_order.is_empty()
            && self.players.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamBatting {
    pub batting_order: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxPlayer {
    pub name: String,
    /// None when the player never came to the plate (e.g. most pitchers).
    pub batting: Option<BattingStats>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BattingStats {
    pub at_bats: u32,
    pub hits: u32,
    pub strike_outs: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerBattingLine {
    pub name: String,
    pub at_bats: u32,
    pub hits: u32,
    pub strike_outs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroHitEntry {
    pub name: String,
    pub at_bats: u32,
    pub strike_outs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrikeoutEntry {
    pub name: String,
    pub strike_outs: u32,
}

/// Metadata about the selected game, seen from the tracked team's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: u64,
    pub date: NaiveDate,
    pub start_time: Option<DateTime<Utc>>,
    pub venue: String,
    pub is_home: bool,
    pub team_name: String,
    pub team_score: u32,
    pub opponent: String,
    pub opponent_score: u32,
}

impl GameSummary {
    pub fn location(&self) -> String {
        let venue = if self.venue.is_empty() { "Unknown Venue" } else { self.venue.as_str() };
        if self.is_home {
            format!("{venue} (Home)")
        } else {
            format!("{venue} (Away)")
        }
    }

    pub fn result_line(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.team_name, self.team_score, self.opponent, self.opponent_score
        )
    }
}

/// The selected game plus its normalized batting lines, in batting-order position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestGame {
    pub summary: GameSummary,
    pub players: Vec<PlayerBattingLine>,
}

/// Everything the dashboard renders for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubReport {
    pub game: GameSummary,
    pub zero_hit: Vec<ZeroHitEntry>,
    pub strikeouts: Vec<StrikeoutEntry>,
}

impl ClubReport {
    pub fn from_latest(latest: LatestGame) -> Self {
        Self {
            zero_hit: views::zero_hit_view(&latest.players),
            strikeouts: views::strikeout_view(&latest.players),
            game: latest.summary,
        }
    }
}
