use crate::feeds::FeedStore;
use crate::ui_state::UiStateStore;
use shared::DashboardConfig;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct AppState {
    pub config: DashboardConfig,
    pub feeds: FeedStore,
    pub ui: UiStateStore,
    warming_up: AtomicBool,
}

impl AppState {
    /// New state; the server reports "warming_up" until [`AppState::mark_ready`]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            feeds: FeedStore::new(),
            ui: UiStateStore::new(),
            warming_up: AtomicBool::new(true),
        }
    }

    pub fn is_warming_up(&self) -> bool {
        self.warming_up.load(Ordering::SeqCst)
    }

    pub fn mark_ready(&self) {
        self.warming_up.store(false, Ordering::SeqCst);
    }
}
