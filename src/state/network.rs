use crate::state::cache::{REPORT_TTL, TtlCache};
use crate::state::messages::{NetworkRequest, NetworkResponse, ReportOutcome};
use chrono::{DateTime, Local};
use log::{debug, error, info};
use mlb_api::client::MlbApi;
use mlb_api::selector::find_latest_game;
use mlb_api::{ClubReport, TrackedTeam};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinError;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: MlbApi,
    team: TrackedTeam,
    cache: TtlCache<(ReportOutcome, DateTime<Local>)>,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    is_loading: Arc<AtomicBool>,
}

impl NetworkWorker {
    pub fn new(
        client: MlbApi,
        team: TrackedTeam,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            team,
            cache: TtlCache::new(REPORT_TTL),
            requests,
            responses,
            is_loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            if let NetworkRequest::Refresh = request {
                debug!("manual refresh: dropping cached report");
                self.cache.invalidate();
            }

            let (outcome, fetched_at) = match self.cache.get(Instant::now()).cloned() {
                Some(hit) => {
                    debug!("serving report cached at {}", hit.1.format("%H:%M:%S"));
                    hit
                }
                None => {
                    self.start_loading_animation().await;
                    let outcome = self.load_report().await;
                    let fetched_at = Local::now();
                    let is_ok = !matches!(outcome, ReportOutcome::Unavailable(_));
                    self.stop_loading_animation(is_ok).await;
                    // Failures are not cached so the next load retries.
                    if is_ok {
                        self.cache.put((outcome.clone(), fetched_at), Instant::now());
                    }
                    (outcome, fetched_at)
                }
            };

            if let Err(e) = self
                .responses
                .send(NetworkResponse::ReportLoaded { outcome, fetched_at })
                .await
            {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    /// Run the whole pipeline in its own task; if it dies, the dashboard
    /// gets "no data available" instead of a half-built report.
    async fn load_report(&self) -> ReportOutcome {
        let client = self.client.clone();
        let team = self.team.clone();
        let today = Local::now().date_naive();
        debug!("loading latest game for {} as of {today}", team.name);

        let pipeline = tokio::spawn(async move {
            find_latest_game(&client, &team, today)
                .await
                .map(ClubReport::from_latest)
        });

        report_outcome(pipeline.await)
    }

    async fn start_loading_animation(&self) {
        self.is_loading.store(true, Ordering::Relaxed);

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        let is_loading = self.is_loading.clone();

        tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                if !is_loading.load(Ordering::Relaxed) {
                    break;
                }
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                let _ = responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await;
            }
        });
    }

    async fn stop_loading_animation(&self, is_ok: bool) {
        self.is_loading.store(false, Ordering::Relaxed);
        tokio::time::sleep(Duration::from_millis(15)).await;

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

/// Map the joined pipeline task onto what the dashboard shows. A panicked or
/// cancelled task becomes `Unavailable`.
fn report_outcome(joined: Result<Option<ClubReport>, JoinError>) -> ReportOutcome {
    match joined {
        Ok(Some(report)) => {
            info!(
                "report ready: game {} ({} in the 0-fer Club, {} with strikeouts)",
                report.game.game_id,
                report.zero_hit.len(),
                report.strikeouts.len()
            );
            ReportOutcome::Ready(report)
        }
        Ok(None) => ReportOutcome::NoRecentGame,
        Err(e) => {
            error!("Error fetching game data: {e}");
            ReportOutcome::Unavailable(e.to_string())
        }
    }
}
