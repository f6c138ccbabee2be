use std::sync::Arc;
use std::time::Instant;

use crate::tracking::TrackingClient;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    client: Arc<dyn TrackingClient>,
    started_at: Instant,
}

impl AppState {
    pub fn new(client: Arc<dyn TrackingClient>) -> Self {
        Self {
            client,
            started_at: Instant::now(),
        }
    }

    pub fn client(&self) -> &dyn TrackingClient {
        self.client.as_ref()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
