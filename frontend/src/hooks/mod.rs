//! Custom Yew hooks for the dashboard.
//!
//! Each card uses these to own its data lifecycle independently of the page.

mod use_card_feed;
mod use_clock;
mod use_dashboard_config;
mod use_now;
mod use_viewport;

pub use use_card_feed::use_card_feed;
pub use use_clock::use_clock;
pub use use_dashboard_config::use_dashboard_config;
pub use use_now::use_now;
pub use use_viewport::use_viewport;
