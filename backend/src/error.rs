//! Error types for the dashboard server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::CardKind;

/// Errors returned by API handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("{0} card has no data feed")]
    NoFeed(CardKind),

    #[error("No data published for {0} yet")]
    NotPublished(CardKind),

    #[error("Control not found: {0}")]
    ControlNotFound(String),

    #[error("Invalid {kind} payload: {source}")]
    InvalidPayload {
        kind: CardKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid UI state key: {0:?}")]
    InvalidUiStateKey(String),

    #[error("UI state value for {key} is too large ({size} bytes)")]
    UiStateValueTooLarge { key: String, size: usize },

    #[error("UI state is full")]
    UiStateFull,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownCard(_)
            | AppError::NoFeed(_)
            | AppError::NotPublished(_)
            | AppError::ControlNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidUiStateKey(_) => StatusCode::BAD_REQUEST,
            AppError::UiStateValueTooLarge { .. } | AppError::UiStateFull => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::NoFeed(CardKind::Clock);
        assert_eq!(format!("{}", err), "Clock card has no data feed");

        let err = AppError::NotPublished(CardKind::SpotPrice);
        assert_eq!(format!("{}", err), "No data published for SpotPrice yet");

        let err = AppError::UnknownCard("stocks".to_string());
        assert_eq!(format!("{}", err), "Unknown card: stocks");
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            AppError::ControlNotFound("lamp".into()).status(),
            StatusCode::NOT_FOUND
        );

        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = AppError::InvalidPayload {
            kind: CardKind::Weather,
            source,
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().starts_with("Invalid Weather payload"));

        assert_eq!(AppError::UiStateFull.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let err = AppError::InvalidUiStateKey("a b".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid UI state key: \"a b\"");
    }
}
