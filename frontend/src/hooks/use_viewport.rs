//! Hook tracking the viewport-size class of the browser window.

use crate::utils;
use gloo::events::EventListener;
use shared::{Breakpoints, ViewportClass};
use yew::prelude::*;

/// Returns the current viewport class, updated on window resize.
///
/// Only re-renders when the class changes, not on every resize event.
#[hook]
pub fn use_viewport(breakpoints: Breakpoints) -> ViewportClass {
    let class = use_state_eq(|| breakpoints.classify(utils::viewport_width()));

    {
        let class = class.clone();
        use_effect_with(breakpoints, move |breakpoints| {
            let breakpoints = *breakpoints;
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    class.set(breakpoints.classify(utils::viewport_width()));
                })
            });
            move || drop(listener)
        });
    }

    *class
}
