use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// Application health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Health check endpoint handler
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime_seconds();

    let health = HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    };

    debug!("Health check requested - uptime: {}s", uptime);
    (StatusCode::OK, Json(health))
}

const DEFAULT_LOG_FILTER: &str = "rastreio=info,tower_http=info";

/// Initialize tracing subscriber for structured logging. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .init();

    info!(max_level = %LevelFilter::current(), "Tracing initialized");
}
