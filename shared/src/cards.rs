//! Card payload types
//!
//! Each data card on the dashboard reads one of these payloads from the
//! backend. Producers publish them with `PUT /api/cards/<slug>`.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Weather
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Rain,
    Sleet,
    Snow,
    Thunder,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Sleet => "Sleet",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunder => "Thunder",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::PartlyCloudy => "⛅",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Fog => "🌫",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Sleet => "🌨",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Thunder => "⛈",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    #[serde(default)]
    pub feels_like_c: Option<f64>,
    pub condition: WeatherCondition,
    #[serde(default)]
    pub humidity_pct: Option<f64>,
    #[serde(default)]
    pub wind_speed_ms: Option<f64>,
    #[serde(default)]
    pub forecast: Vec<ForecastEntry>,
    pub updated_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Forecast entries strictly after `now`, at most `limit`
    pub fn upcoming_forecast(&self, now: DateTime<Utc>, limit: usize) -> Vec<&ForecastEntry> {
        let mut upcoming: Vec<&ForecastEntry> =
            self.forecast.iter().filter(|entry| entry.time > now).collect();
        upcoming.sort_by_key(|entry| entry.time);
        upcoming.truncate(limit);
        upcoming
    }
}

// =============================================================================
// Controls
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// On/off switch for a single device or group
    Toggle,
    /// Scene activation; at most one scene is active at a time
    Scene,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub name: String,
    pub kind: ControlKind,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsReport {
    pub controls: Vec<Control>,
}

impl ControlsReport {
    pub fn find(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.id == id)
    }

    /// Flip a control and return its new state.
    ///
    /// Activating a scene deactivates every other scene. Activating an
    /// already active scene leaves it active.
    pub fn toggle(&mut self, id: &str) -> Option<Control> {
        let index = self.controls.iter().position(|control| control.id == id)?;

        match self.controls[index].kind {
            ControlKind::Toggle => {
                self.controls[index].active = !self.controls[index].active;
            }
            ControlKind::Scene => {
                for control in self
                    .controls
                    .iter_mut()
                    .filter(|control| control.kind == ControlKind::Scene)
                {
                    control.active = false;
                }
                self.controls[index].active = true;
            }
        }

        Some(self.controls[index].clone())
    }

    /// Replace a control with the state reported by the server.
    ///
    /// An active scene switches every other scene off. Returns false when
    /// the id is unknown, leaving the report unchanged.
    pub fn apply(&mut self, updated: &Control) -> bool {
        let Some(index) = self.controls.iter().position(|control| control.id == updated.id)
        else {
            return false;
        };

        if updated.kind == ControlKind::Scene && updated.active {
            for control in self
                .controls
                .iter_mut()
                .filter(|control| control.kind == ControlKind::Scene)
            {
                control.active = false;
            }
        }
        self.controls[index] = updated.clone();
        true
    }
}

// =============================================================================
// Sensors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub updated_at: DateTime<Utc>,
}

impl SensorReading {
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now - self.updated_at > max_age
    }

    pub fn display_value(&self) -> String {
        format!("{:.1} {}", self.value, self.unit).trim_end().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorsReport {
    pub sensors: Vec<SensorReading>,
}

// =============================================================================
// Spot price
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub starts_at: DateTime<Utc>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPriceReport {
    pub currency: String,
    /// Display unit, e.g. "c/kWh"
    pub unit: String,
    pub prices: Vec<PricePoint>,
}

impl SpotPriceReport {
    /// The price in effect at `now`: the latest point that has started
    pub fn current(&self, now: DateTime<Utc>) -> Option<PricePoint> {
        self.prices
            .iter()
            .filter(|point| point.starts_at <= now)
            .max_by_key(|point| point.starts_at)
            .copied()
    }

    /// Cheapest point that has not yet started
    pub fn cheapest_upcoming(&self, now: DateTime<Utc>) -> Option<PricePoint> {
        self.prices
            .iter()
            .filter(|point| point.starts_at > now)
            .min_by(|a, b| a.price.total_cmp(&b.price))
            .copied()
    }

    /// Lowest and highest price across the report
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut prices = self.prices.iter().map(|point| point.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        }))
    }
}

// =============================================================================
// Train schedule
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub line: String,
    pub destination: String,
    pub scheduled: DateTime<Utc>,
    #[serde(default)]
    pub estimated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
}

impl Departure {
    /// Best known departure time
    pub fn expected(&self) -> DateTime<Utc> {
        self.estimated.unwrap_or(self.scheduled)
    }

    /// Whole minutes late, zero when on time or early
    pub fn delay_minutes(&self) -> i64 {
        (self.expected() - self.scheduled).num_minutes().max(0)
    }

    pub fn minutes_until(&self, now: DateTime<Utc>) -> i64 {
        (self.expected() - now).num_minutes().max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainSchedule {
    pub station: String,
    pub departures: Vec<Departure>,
}

impl TrainSchedule {
    /// Departures that have not left yet, soonest first.
    ///
    /// Cancelled departures stay in the list so the card can show them.
    pub fn upcoming(&self, now: DateTime<Utc>, limit: usize) -> Vec<&Departure> {
        let mut upcoming: Vec<&Departure> = self
            .departures
            .iter()
            .filter(|departure| departure.expected() >= now)
            .collect();
        upcoming.sort_by_key(|departure| departure.expected());
        upcoming.truncate(limit);
        upcoming
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Display strings for the clock card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub seconds: String,
    pub date: String,
    pub week: u32,
}

impl ClockFace {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
            seconds: format!("{:02}", now.second()),
            date: now.format("%A %-d %B").to_string(),
            week: now.iso_week().week(),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}°", celsius)
}

pub fn format_price(price: f64, unit: &str) -> String {
    format!("{:.2} {}", price, unit)
}

/// Human countdown, e.g. "now", "7 min", "1 h 5 min"
pub fn format_minutes_until(minutes: i64) -> String {
    if minutes <= 0 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, hour, minute, 0).unwrap()
    }

    fn control(id: &str, kind: ControlKind, active: bool) -> Control {
        Control {
            id: id.into(),
            name: id.to_uppercase(),
            kind,
            active,
        }
    }

    fn forecast_entry(
        time: DateTime<Utc>,
        temperature_c: f64,
        condition: WeatherCondition,
    ) -> ForecastEntry {
        ForecastEntry {
            time,
            temperature_c,
            condition,
        }
    }

    fn departure(line: &str, scheduled: DateTime<Utc>) -> Departure {
        Departure {
            line: line.into(),
            destination: "Helsinki".into(),
            scheduled,
            estimated: None,
            track: None,
            cancelled: false,
        }
    }

    #[test]
    fn toggle_flips_switch() {
        let mut report = ControlsReport {
            controls: vec![control("lamp", ControlKind::Toggle, false)],
        };
        assert!(report.toggle("lamp").unwrap().active);
        assert!(!report.toggle("lamp").unwrap().active);
    }

    #[test]
    fn activating_scene_deactivates_others() {
        let mut report = ControlsReport {
            controls: vec![
                control("day", ControlKind::Scene, true),
                control("night", ControlKind::Scene, false),
                control("lamp", ControlKind::Toggle, true),
            ],
        };

        let night = report.toggle("night").unwrap();
        assert!(night.active);
        assert!(!report.find("day").unwrap().active);
        // Toggles are unaffected by scene changes
        assert!(report.find("lamp").unwrap().active);

        // Re-activating keeps the scene on
        assert!(report.toggle("night").unwrap().active);
    }

    #[test]
    fn toggle_unknown_control() {
        let mut report = ControlsReport::default();
        assert!(report.toggle("missing").is_none());
    }

    #[test]
    fn server_state_overrides_local_toggle() {
        let mut report = ControlsReport {
            controls: vec![
                control("day", ControlKind::Scene, false),
                control("night", ControlKind::Scene, false),
                control("lamp", ControlKind::Toggle, false),
            ],
        };

        // Local guess says the lamp is on; the server says it is still off
        report.toggle("lamp");
        assert!(report.apply(&control("lamp", ControlKind::Toggle, false)));
        assert!(!report.find("lamp").unwrap().active);

        // Local guess activated "day"; the server reports "night" active
        report.toggle("day");
        assert!(report.apply(&control("night", ControlKind::Scene, true)));
        assert!(!report.find("day").unwrap().active);
        assert!(report.find("night").unwrap().active);
        assert!(!report.find("lamp").unwrap().active);
    }

    #[test]
    fn apply_unknown_control_is_ignored() {
        let mut report = ControlsReport {
            controls: vec![control("day", ControlKind::Scene, true)],
        };
        assert!(!report.apply(&control("fan", ControlKind::Toggle, true)));
        assert_eq!(report.controls.len(), 1);
        assert!(report.find("day").unwrap().active);
    }

    #[test]
    fn current_spot_price() {
        let report = SpotPriceReport {
            currency: "EUR".into(),
            unit: "c/kWh".into(),
            prices: vec![
                PricePoint { starts_at: at(10, 0), price: 5.0 },
                PricePoint { starts_at: at(11, 0), price: 9.5 },
                PricePoint { starts_at: at(12, 0), price: 2.25 },
                PricePoint { starts_at: at(13, 0), price: 4.0 },
            ],
        };

        assert_eq!(report.current(at(11, 30)).unwrap().price, 9.5);
        assert_eq!(report.current(at(11, 0)).unwrap().price, 9.5);
        assert!(report.current(at(9, 59)).is_none());
        assert_eq!(report.cheapest_upcoming(at(11, 30)).unwrap().price, 2.25);
        assert!(report.cheapest_upcoming(at(13, 0)).is_none());
        assert_eq!(report.range(), Some((2.25, 9.5)));
    }

    #[test]
    fn empty_spot_price_range() {
        let report = SpotPriceReport {
            currency: "EUR".into(),
            unit: "c/kWh".into(),
            prices: vec![],
        };
        assert_eq!(report.range(), None);
    }

    #[test]
    fn upcoming_departures_sorted_by_expected_time() {
        let mut late = departure("A", at(8, 0));
        late.estimated = Some(at(8, 20));
        let mut cancelled = departure("K", at(8, 15));
        cancelled.cancelled = true;

        let schedule = TrainSchedule {
            station: "Kerava".into(),
            departures: vec![
                late,
                departure("I", at(8, 10)),
                departure("P", at(7, 50)),
                cancelled,
            ],
        };

        let upcoming = schedule.upcoming(at(8, 0), 10);
        let lines: Vec<&str> = upcoming.iter().map(|d| d.line.as_str()).collect();
        assert_eq!(lines, ["I", "K", "A"]);
        assert!(upcoming[1].cancelled);
        assert_eq!(upcoming[2].delay_minutes(), 20);
        assert_eq!(upcoming[2].minutes_until(at(8, 0)), 20);

        assert_eq!(schedule.upcoming(at(8, 0), 1).len(), 1);
    }

    #[test]
    fn early_departure_has_no_delay() {
        let mut early = departure("R", at(9, 0));
        early.estimated = Some(at(8, 58));
        assert_eq!(early.delay_minutes(), 0);
    }

    #[test]
    fn stale_sensor() {
        let reading = SensorReading {
            id: "t1".into(),
            name: "Living room".into(),
            value: 21.456,
            unit: "°C".into(),
            updated_at: at(10, 0),
        };
        assert!(!reading.is_stale(at(10, 10), Duration::minutes(15)));
        assert!(reading.is_stale(at(10, 16), Duration::minutes(15)));
        assert_eq!(reading.display_value(), "21.5 °C");
    }

    #[test]
    fn forecast_skips_past_entries() {
        let report = WeatherReport {
            location: "Home".into(),
            temperature_c: 3.0,
            feels_like_c: None,
            condition: WeatherCondition::Rain,
            humidity_pct: None,
            wind_speed_ms: None,
            forecast: vec![
                forecast_entry(at(15, 0), 4.0, WeatherCondition::Cloudy),
                forecast_entry(at(9, 0), 1.0, WeatherCondition::Fog),
                forecast_entry(at(12, 0), 3.5, WeatherCondition::Rain),
            ],
            updated_at: at(10, 0),
        };
        let upcoming = report.upcoming_forecast(at(10, 0), 5);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].time, at(12, 0));
    }

    #[test]
    fn weather_report_accepts_minimal_json() {
        let json = r#"{
            "location": "Home",
            "temperature_c": -2.5,
            "condition": "partly_cloudy",
            "updated_at": "2026-10-18T10:00:00Z"
        }"#;
        let report: WeatherReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.condition, WeatherCondition::PartlyCloudy);
        assert!(report.forecast.is_empty());
    }

    #[test]
    fn clock_face() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap();
        let face = ClockFace::at(now);
        assert_eq!(face.time, "07:05");
        assert_eq!(face.seconds, "09");
        assert_eq!(face.date, "Sunday 18 October");
        assert_eq!(face.week, 42);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_temperature(21.456), "21.5°");
        assert_eq!(format_price(12.3456, "c/kWh"), "12.35 c/kWh");
        assert_eq!(format_minutes_until(0), "now");
        assert_eq!(format_minutes_until(7), "7 min");
        assert_eq!(format_minutes_until(65), "1 h 5 min");
    }
}
