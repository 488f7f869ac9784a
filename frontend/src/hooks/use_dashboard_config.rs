//! Hook for the server's dashboard config, fetched once per page load.
//!
//! Every card reads its refresh interval from here. The first caller starts
//! the request; later callers wait on it or read the cached result.

use crate::utils;
use gloo_net::http::Request;
use shared::api::{self, DashboardConfig};
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// What a new subscriber has to do
#[derive(Debug, PartialEq)]
enum Subscription {
    /// Config already loaded
    Ready(DashboardConfig),
    /// First subscriber: start the request
    Fetch,
    /// A request is in flight; the callback fires when it completes
    Wait,
}

#[derive(Default)]
enum ConfigCache {
    #[default]
    Idle,
    Loading(Vec<Callback<DashboardConfig>>),
    Ready(DashboardConfig),
}

impl ConfigCache {
    fn subscribe(&mut self, on_ready: Callback<DashboardConfig>) -> Subscription {
        match self {
            ConfigCache::Ready(config) => Subscription::Ready(config.clone()),
            ConfigCache::Loading(waiters) => {
                waiters.push(on_ready);
                Subscription::Wait
            }
            ConfigCache::Idle => {
                *self = ConfigCache::Loading(vec![on_ready]);
                Subscription::Fetch
            }
        }
    }

    /// Finish the in-flight request and hand back the callbacks to notify.
    /// A failed request resets the cache so the next subscriber retries.
    fn resolve(&mut self, config: Option<DashboardConfig>) -> Vec<Callback<DashboardConfig>> {
        let waiters = match std::mem::take(self) {
            ConfigCache::Loading(waiters) => waiters,
            _ => Vec::new(),
        };
        match config {
            Some(config) => {
                *self = ConfigCache::Ready(config);
                waiters
            }
            None => Vec::new(),
        }
    }
}

thread_local! {
    static CONFIG: RefCell<ConfigCache> = RefCell::new(ConfigCache::default());
}

async fn fetch_config() -> Option<DashboardConfig> {
    let url = utils::api_url(api::CONFIG_PATH);
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<DashboardConfig>().await {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to parse config: {:?}", e);
                None
            }
        },
        Ok(response) => {
            log::warn!("Config request failed: status {}", response.status());
            None
        }
        Err(e) => {
            log::warn!("Failed to fetch config: {:?}", e);
            None
        }
    }
}

/// Returns the dashboard config, or the built-in defaults until it loads.
#[hook]
pub fn use_dashboard_config() -> DashboardConfig {
    let config = use_state_eq(DashboardConfig::default);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let on_ready = Callback::from(move |loaded: DashboardConfig| config.set(loaded));
            match CONFIG.with(|cache| cache.borrow_mut().subscribe(on_ready.clone())) {
                Subscription::Ready(loaded) => on_ready.emit(loaded),
                Subscription::Wait => {}
                Subscription::Fetch => spawn_local(async move {
                    let loaded = fetch_config().await;
                    let waiters = CONFIG.with(|cache| cache.borrow_mut().resolve(loaded.clone()));
                    if let Some(loaded) = loaded {
                        for waiter in waiters {
                            waiter.emit(loaded.clone());
                        }
                    }
                }),
            }
            || ()
        });
    }

    (*config).clone()
}
