use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared::{CardKind, Control};
use std::sync::Arc;

fn card_from_slug(slug: &str) -> Result<CardKind, AppError> {
    CardKind::from_slug(slug).ok_or_else(|| AppError::UnknownCard(slug.to_string()))
}

pub async fn get_card(
    State(app_state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind = card_from_slug(&slug)?;
    Ok(Json(app_state.feeds.get(kind).await?))
}

pub async fn publish_card(
    State(app_state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    let kind = card_from_slug(&slug)?;
    app_state.feeds.publish(kind, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_control(
    State(app_state): State<Arc<AppState>>,
    Path(control_id): Path<String>,
) -> Result<Json<Control>, AppError> {
    Ok(Json(app_state.feeds.toggle_control(&control_id).await?))
}
