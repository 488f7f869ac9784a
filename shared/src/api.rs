//! API contract between the dashboard frontend and backend
//!
//! Paths, configuration payloads and the client-side error type.

use crate::layout::CardKind;
use serde::{Deserialize, Serialize};

pub const HEALTH_LIVE_PATH: &str = "/health/live";
pub const HEALTH_READY_PATH: &str = "/health/ready";
pub const CONFIG_PATH: &str = "/api/config";
pub const UI_STATE_PATH: &str = "/api/ui/state";

/// Path of a card's data feed (e.g. "/api/cards/spot-price")
pub fn card_path(kind: CardKind) -> String {
    format!("/api/cards/{}", kind.slug())
}

/// Path that toggles a single control on the controls card
pub fn control_toggle_path(control_id: &str) -> String {
    format!("/api/cards/{}/{}/toggle", CardKind::Controls.slug(), control_id)
}

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Nothing published yet, or unknown resource
    NotFound(String),
}

impl ApiError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 404 {
            ApiError::NotFound(message)
        } else {
            ApiError::Server { status, message }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Polling interval of each data card, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshIntervals {
    pub weather_secs: u32,
    pub controls_secs: u32,
    pub sensors_secs: u32,
    pub spot_price_secs: u32,
    pub train_schedule_secs: u32,
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Self {
            weather_secs: 600,
            controls_secs: 10,
            sensors_secs: 30,
            spot_price_secs: 900,
            train_schedule_secs: 60,
        }
    }
}

impl RefreshIntervals {
    /// `None` for cards without a server feed
    pub fn for_card(&self, kind: CardKind) -> Option<u32> {
        match kind {
            CardKind::Weather => Some(self.weather_secs),
            CardKind::Controls => Some(self.controls_secs),
            CardKind::Clock => None,
            CardKind::Sensors => Some(self.sensors_secs),
            CardKind::SpotPrice => Some(self.spot_price_secs),
            CardKind::TrainSchedule => Some(self.train_schedule_secs),
        }
    }
}

/// Client-facing dashboard settings served at [`CONFIG_PATH`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    #[serde(default)]
    pub refresh: RefreshIntervals,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Home".to_string(),
            refresh: RefreshIntervals::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_paths() {
        assert_eq!(card_path(CardKind::Weather), "/api/cards/weather");
        assert_eq!(card_path(CardKind::SpotPrice), "/api/cards/spot-price");
        assert_eq!(
            control_toggle_path("lamp"),
            "/api/cards/controls/lamp/toggle"
        );
    }

    #[test]
    fn clock_has_no_refresh_interval() {
        let refresh = RefreshIntervals::default();
        assert_eq!(refresh.for_card(CardKind::Clock), None);
        for kind in CardKind::ORDER.iter().filter(|kind| **kind != CardKind::Clock) {
            assert!(refresh.for_card(*kind).is_some(), "{} has no interval", kind);
        }
    }

    #[test]
    fn config_defaults_missing_refresh() {
        let config: DashboardConfig = serde_json::from_str(r#"{"title":"Cabin"}"#).unwrap();
        assert_eq!(config.title, "Cabin");
        assert_eq!(config.refresh, RefreshIntervals::default());
    }

    #[test]
    fn status_classification() {
        assert_eq!(
            ApiError::from_status(404, "weather"),
            ApiError::NotFound("weather".into())
        );
        assert_eq!(
            ApiError::from_status(500, "boom").to_string(),
            "Server error (500): boom"
        );
    }

    #[test]
    fn health_body_is_status_only() {
        let json = serde_json::to_string(&HealthResponse::new("ok")).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
