use crate::state::network::LoadingState;
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use mlb_api::ClubReport;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    /// Serve from cache when fresh, otherwise fetch.
    LoadReport,
    /// Invalidate the cache, then fetch.
    Refresh,
}

/// What the dashboard can show for one query.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Ready(ClubReport),
    /// No completed game in the lookback window.
    NoRecentGame,
    Unavailable(String),
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ReportLoaded { outcome: ReportOutcome, fetched_at: DateTime<Local> },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
