use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use shared::HealthResponse;
use std::sync::Arc;

/// Liveness: the process is up and serving requests
pub async fn live() -> Json<HealthResponse> {
    Json(HealthResponse::new("ok"))
}

/// Readiness: startup has finished
pub async fn ready(State(app_state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    if app_state.is_warming_up() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::new("warming_up")),
        );
    }

    (StatusCode::OK, Json(HealthResponse::new("ready")))
}
