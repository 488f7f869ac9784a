use crate::state::AppState;
use axum::{extract::State, Json};
use shared::DashboardConfig;
use std::sync::Arc;

pub async fn get_config(State(app_state): State<Arc<AppState>>) -> Json<DashboardConfig> {
    Json(app_state.config.clone())
}
