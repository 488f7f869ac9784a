use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

pub async fn get_ui_state(
    State(app_state): State<Arc<AppState>>,
) -> Json<HashMap<String, serde_json::Value>> {
    Json(app_state.ui.get_all().await)
}

pub async fn store_ui_state(
    State(app_state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Json(value): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    app_state.ui.store(key, value).await?;
    Ok(StatusCode::NO_CONTENT)
}
