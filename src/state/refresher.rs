use crate::state::cache::REPORT_TTL;
use crate::state::messages::NetworkRequest;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Reloads the report once per cache lifetime. Each tick drops the cached
/// report, since the startup entry is stored a little after the interval
/// starts and would otherwise survive the first tick.
pub struct PeriodicRefresher {
    network_requests: mpsc::Sender<NetworkRequest>,
    period: Duration,
}

impl PeriodicRefresher {
    pub fn new(network_requests: mpsc::Sender<NetworkRequest>) -> Self {
        Self::with_period(network_requests, REPORT_TTL)
    }

    pub fn with_period(network_requests: mpsc::Sender<NetworkRequest>, period: Duration) -> Self {
        Self { network_requests, period }
    }

    pub async fn run(self) {
        let mut report_interval = interval(self.period);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        report_interval.tick().await;

        loop {
            report_interval.tick().await;
            if self
                .network_requests
                .send(NetworkRequest::Refresh)
                .await
                .is_err()
            {
                break;
            }
        }
    }
}
