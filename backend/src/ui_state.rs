//! Key/value store for small pieces of UI state
//!
//! Memory only: values are lost on restart. Keys and values are bounded so
//! clients cannot grow the map without limit.

use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Distinct keys held at once
pub const MAX_KEYS: usize = 64;
/// Longest accepted key
pub const MAX_KEY_LEN: usize = 64;
/// Largest accepted value, measured as serialized JSON
pub const MAX_VALUE_BYTES: usize = 16 * 1024;

/// Keys are short identifiers: ASCII letters, digits, `-`, `_` and `.`
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

#[derive(Clone, Default)]
pub struct UiStateStore {
    inner: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl UiStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_all(&self) -> HashMap<String, serde_json::Value> {
        self.inner.read().await.clone()
    }

    /// Insert or replace a value. Replacing an existing key is always
    /// allowed, even when the store is full.
    pub async fn store(&self, key: String, value: serde_json::Value) -> Result<(), AppError> {
        if !is_valid_key(&key) {
            return Err(AppError::InvalidUiStateKey(key));
        }

        let size = serde_json::to_vec(&value)?.len();
        if size > MAX_VALUE_BYTES {
            return Err(AppError::UiStateValueTooLarge { key, size });
        }

        let mut state = self.inner.write().await;
        if state.len() >= MAX_KEYS && !state.contains_key(&key) {
            return Err(AppError::UiStateFull);
        }

        tracing::debug!("Storing UI state '{}' ({} bytes)", key, size);
        state.insert(key, value);
        Ok(())
    }
}
