//! In-memory store of the latest payload for each data card
//!
//! Producers publish a full payload per card; readers always get the most
//! recent one. Payloads are validated against the card's type on publish.

use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    CardKind, Control, ControlsReport, SensorsReport, SpotPriceReport, TrainSchedule,
    WeatherReport,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Feeds {
    weather: Option<WeatherReport>,
    controls: Option<ControlsReport>,
    sensors: Option<SensorsReport>,
    spot_price: Option<SpotPriceReport>,
    train_schedule: Option<TrainSchedule>,
}

fn to_json<T: Serialize>(kind: CardKind, feed: &Option<T>) -> Result<serde_json::Value, AppError> {
    let payload = feed.as_ref().ok_or(AppError::NotPublished(kind))?;
    Ok(serde_json::to_value(payload)?)
}

fn parse<T: DeserializeOwned>(kind: CardKind, value: serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|source| AppError::InvalidPayload { kind, source })
}

#[derive(Clone, Default)]
pub struct FeedStore {
    inner: Arc<RwLock<Feeds>>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest payload of a card as JSON
    pub async fn get(&self, kind: CardKind) -> Result<serde_json::Value, AppError> {
        let feeds = self.inner.read().await;
        match kind {
            CardKind::Weather => to_json(kind, &feeds.weather),
            CardKind::Controls => to_json(kind, &feeds.controls),
            CardKind::Sensors => to_json(kind, &feeds.sensors),
            CardKind::SpotPrice => to_json(kind, &feeds.spot_price),
            CardKind::TrainSchedule => to_json(kind, &feeds.train_schedule),
            CardKind::Clock => Err(AppError::NoFeed(kind)),
        }
    }

    /// Replace a card's payload after checking it parses as the card's type
    pub async fn publish(&self, kind: CardKind, value: serde_json::Value) -> Result<(), AppError> {
        // Parse before taking the lock so a bad payload never blocks readers
        match kind {
            CardKind::Weather => {
                let report = parse(kind, value)?;
                self.inner.write().await.weather = Some(report);
            }
            CardKind::Controls => {
                let report = parse(kind, value)?;
                self.inner.write().await.controls = Some(report);
            }
            CardKind::Sensors => {
                let report = parse(kind, value)?;
                self.inner.write().await.sensors = Some(report);
            }
            CardKind::SpotPrice => {
                let report = parse(kind, value)?;
                self.inner.write().await.spot_price = Some(report);
            }
            CardKind::TrainSchedule => {
                let schedule = parse(kind, value)?;
                self.inner.write().await.train_schedule = Some(schedule);
            }
            CardKind::Clock => return Err(AppError::NoFeed(kind)),
        }

        tracing::info!("Published {} feed", kind);
        Ok(())
    }

    /// Toggle one control and return its new state
    pub async fn toggle_control(&self, control_id: &str) -> Result<Control, AppError> {
        let mut feeds = self.inner.write().await;
        let controls = feeds
            .controls
            .as_mut()
            .ok_or(AppError::NotPublished(CardKind::Controls))?;

        let control = controls
            .toggle(control_id)
            .ok_or_else(|| AppError::ControlNotFound(control_id.to_string()))?;

        tracing::info!("Control {} toggled, active={}", control.id, control.active);
        Ok(control)
    }
}
