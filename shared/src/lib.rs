//! Types shared between the dashboard frontend and backend.
//!
//! Everything in this crate must stay WASM compatible.

// Grid configuration and card ordering
pub mod layout;
pub use layout::{
    Breakpoints, CardKind, ContainerSpec, DashboardLayout, GridColumns, GridLayout, Mounted,
    Overflow, RenderTree, ViewportClass,
};

// Card payloads
pub mod cards;
pub use cards::{
    ClockFace, Control, ControlKind, ControlsReport, Departure, ForecastEntry, PricePoint,
    SensorReading, SensorsReport, SpotPriceReport, TrainSchedule, WeatherCondition, WeatherReport,
};

// API paths and client types
pub mod api;
pub use api::{ApiError, DashboardConfig, HealthResponse, RefreshIntervals};
