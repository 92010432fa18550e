//! Liveness and readiness handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Banner served at `/`.
pub const LIVE_BANNER: &str = "golden_bowl_side is LIVE";

/// Root liveness banner.
pub async fn live() -> &'static str {
    LIVE_BANNER
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the store is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(backend = state.store().backend(), "Readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
