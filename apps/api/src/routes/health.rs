use axum::{extract::State, Json};
use shared::HealthResponse;

use crate::state::AppState;

/// GET /health
/// Reports liveness with the configured version and the current time.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.config.app_version.clone()))
}
