//! Hook providing the current local time, refreshed every second.

use chrono::{Local, NaiveDateTime};
use yew::prelude::*;

/// Returns the current local time and re-renders the caller once a second.
#[hook]
pub fn use_clock() -> NaiveDateTime {
    let now = use_state(|| Local::now().naive_local());

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = gloo::timers::callback::Interval::new(1_000, move || {
                now.set(Local::now().naive_local());
            });
            move || drop(interval)
        });
    }

    *now
}
