//! Dashboard page - grid container and the six cards

use crate::cards::{
    ClockCard, ControlsCard, SensorsCard, SpotPriceCard, TrainScheduleCard, WeatherCard,
};
use crate::hooks::use_viewport;
use shared::{CardKind, DashboardLayout, ViewportClass};
use std::convert::Infallible;
use yew::prelude::*;

/// Instantiate the component for one card, with no properties.
pub fn card_html(kind: CardKind) -> Html {
    match kind {
        CardKind::Weather => html! { <WeatherCard /> },
        CardKind::Controls => html! { <ControlsCard /> },
        CardKind::Clock => html! { <ClockCard /> },
        CardKind::Sensors => html! { <SensorsCard /> },
        CardKind::SpotPrice => html! { <SpotPriceCard /> },
        CardKind::TrainSchedule => html! { <TrainScheduleCard /> },
    }
}

fn viewport_attr(class: ViewportClass) -> &'static str {
    match class {
        ViewportClass::Small => "small",
        ViewportClass::Medium => "medium",
        ViewportClass::Large => "large",
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let layout = DashboardLayout::new();
    let viewport = use_viewport(layout.grid().breakpoints);
    // Instantiating a card cannot fail here; a card that fails while
    // rendering takes the whole page down with it.
    let mounted = match layout.mount(viewport, |kind| Ok::<Html, Infallible>(card_html(kind))) {
        Ok(mounted) => mounted,
        Err(never) => match never {},
    };
    let container = mounted.container;

    html! {
        <div
            class="dashboard-grid"
            style={container.style()}
            data-columns={container.columns.to_string()}
            data-viewport={viewport_attr(viewport)}
        >
            { for mounted.children.into_iter().map(|(_, card)| card) }
        </div>
    }
}
