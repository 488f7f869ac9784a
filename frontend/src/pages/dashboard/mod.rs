//! Dashboard page
//!
//! The single view of the app: a responsive grid holding the six cards.

mod page;

pub use page::DashboardPage;
