//! Hook providing the current UTC time at a coarse tick.
//!
//! Cards that compare feed data against "now" (countdowns, the current price
//! slot, staleness) re-render on this tick so they stay correct between polls.

use chrono::{DateTime, Utc};
use std::time::Duration;
use yew::prelude::*;

/// Shortest tick accepted; anything faster is the clock card's job.
const MIN_TICK_MS: u32 = 1_000;

fn tick_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis())
        .unwrap_or(u32::MAX)
        .max(MIN_TICK_MS)
}

/// Returns the current time and re-renders the caller every `period`.
#[hook]
pub fn use_now(period: Duration) -> DateTime<Utc> {
    let now = use_state(Utc::now);
    let millis = tick_millis(period);

    {
        let now = now.clone();
        use_effect_with(millis, move |millis| {
            let interval = gloo::timers::callback::Interval::new(*millis, move || {
                now.set(Utc::now());
            });
            move || drop(interval)
        });
    }

    *now
}
