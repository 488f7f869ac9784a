//! Hook for a card's data feed with automatic polling.

use crate::utils;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::api::{self, ApiError};
use shared::CardKind;
use super::use_dashboard_config;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_card_feed hook.
pub struct UseCardFeed<T: Clone + PartialEq + 'static> {
    /// Latest payload, kept across failed refreshes
    pub data: Option<T>,
    /// Error from the most recent fetch, cleared on success
    pub error: Option<ApiError>,
    /// Whether the initial fetch is still in flight
    pub loading: bool,
    /// Manually trigger a refresh
    pub refresh: Callback<()>,
    /// Replace the payload locally (e.g. after a control was toggled)
    pub set_data: Callback<T>,
}

/// GET a card's payload from the backend
pub async fn fetch_feed<T: DeserializeOwned>(kind: CardKind) -> Result<T, ApiError> {
    let url = utils::api_url(&api::card_path(kind));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), message));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fallback when a card has no configured interval
const DEFAULT_REFRESH_SECS: u32 = 60;

/// Hook for fetching and polling one card's payload.
///
/// Fetches on mount, then polls at the card's configured refresh interval.
/// Failures are kept in `error`; the last good payload stays in `data`.
///
/// # Example
/// ```ignore
/// let feed = use_card_feed::<WeatherReport>(CardKind::Weather);
/// if let Some(report) = &feed.data {
///     // Render report
/// }
/// ```
#[hook]
pub fn use_card_feed<T>(kind: CardKind) -> UseCardFeed<T>
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
{
    let data = use_state(|| None::<T>);
    let error = use_state(|| None::<ApiError>);
    let loading = use_state(|| true);
    let refresh_trigger = use_state(|| 0u32);
    let refresh_secs = use_dashboard_config()
        .refresh
        .for_card(kind)
        .unwrap_or(DEFAULT_REFRESH_SECS)
        .max(1);

    let fetch = {
        let data = data.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |_: ()| {
            let data = data.clone();
            let error = error.clone();
            let loading = loading.clone();

            spawn_local(async move {
                match fetch_feed::<T>(kind).await {
                    Ok(payload) => {
                        data.set(Some(payload));
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to fetch {} feed: {}", kind, e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial fetch and manual refreshes
    {
        let fetch = fetch.clone();
        use_effect_with(*refresh_trigger, move |_| {
            fetch.emit(());
            || ()
        });
    }

    // Polling, restarted whenever the interval changes
    {
        let fetch = fetch.clone();
        use_effect_with(refresh_secs, move |secs| {
            let interval = gloo::timers::callback::Interval::new(secs * 1_000, move || {
                fetch.emit(());
            });
            move || drop(interval)
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    let set_data = {
        let data = data.clone();
        Callback::from(move |payload: T| {
            data.set(Some(payload));
        })
    };

    UseCardFeed {
        data: (*data).clone(),
        error: (*error).clone(),
        loading: *loading,
        refresh,
        set_data,
    }
}
