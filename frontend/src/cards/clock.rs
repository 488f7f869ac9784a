use crate::components::{CardFrame, CardStatus};
use crate::hooks::use_clock;
use shared::{CardKind, ClockFace};
use yew::prelude::*;

#[function_component(ClockCard)]
pub fn clock_card() -> Html {
    let now = use_clock();
    let face = ClockFace::at(now);

    html! {
        <CardFrame kind={CardKind::Clock} status={CardStatus::Ready}>
            <div class="clock-time">
                <span class="clock-hm">{ &face.time }</span>
                <span class="clock-seconds muted">{ &face.seconds }</span>
            </div>
            <div class="clock-date">{ &face.date }</div>
            <div class="clock-week muted">{ format!("Week {}", face.week) }</div>
        </CardFrame>
    }
}
