pub mod cards;
pub mod config;
pub mod health;
pub mod ui_state;
