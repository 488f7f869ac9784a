//! Dashboard cards
//!
//! Every card is a prop-less component that fetches, refreshes and reports
//! errors for its own content. Cards never talk to each other.

mod clock;
mod controls;
mod sensors;
mod spot_price;
mod train_schedule;
mod weather;

pub use clock::ClockCard;
pub use controls::ControlsCard;
pub use sensors::SensorsCard;
pub use spot_price::SpotPriceCard;
pub use train_schedule::TrainScheduleCard;
pub use weather::WeatherCard;

use crate::utils;
use chrono::{DateTime, Local, Utc};
use std::time::Duration;

/// How often time-dependent cards re-evaluate "now" between polls
const NOW_TICK: Duration = Duration::from_secs(30);

/// "updated 3 min ago" label for a card's title bar
fn updated_label(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    utils::format_age((now - updated_at).num_seconds().max(0))
}

/// Local wall-clock time, e.g. "14:05"
fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}
