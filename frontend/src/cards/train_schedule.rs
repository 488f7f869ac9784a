use super::{local_time, NOW_TICK};
use crate::components::{CardFrame, CardStatus};
use crate::hooks::{use_card_feed, use_now};
use chrono::{DateTime, Utc};
use shared::cards::format_minutes_until;
use shared::{CardKind, Departure, TrainSchedule};
use yew::prelude::*;

const MAX_DEPARTURES: usize = 6;

fn departure_row(departure: &Departure, now: DateTime<Utc>) -> Html {
    let delay = departure.delay_minutes();

    html! {
        <li class={classes!("departure", departure.cancelled.then_some("cancelled"))}>
            <span class="departure-line">{ &departure.line }</span>
            <span class="departure-destination">{ &departure.destination }</span>
            if let Some(track) = &departure.track {
                <span class="departure-track muted">{ format!("Track {}", track) }</span>
            }
            <span class="departure-time">{ local_time(departure.scheduled) }</span>
            if departure.cancelled {
                <span class="departure-status">{ "Cancelled" }</span>
            } else {
                <>
                    <span class="departure-countdown">
                        { format_minutes_until(departure.minutes_until(now)) }
                    </span>
                    if delay > 0 {
                        <span class="departure-delay">{ format!("+{}", delay) }</span>
                    }
                </>
            }
        </li>
    }
}

#[function_component(TrainScheduleCard)]
pub fn train_schedule_card() -> Html {
    let feed = use_card_feed::<TrainSchedule>(CardKind::TrainSchedule);
    let status = CardStatus::from_feed(feed.loading, feed.data.is_some(), feed.error.as_ref());
    let now = use_now(NOW_TICK);
    let subtitle = feed.data.as_ref().map(|schedule| schedule.station.clone());
    let on_retry = feed.refresh.clone();

    html! {
        <CardFrame kind={CardKind::TrainSchedule} {status} {subtitle} {on_retry}>
            if let Some(schedule) = &feed.data {
                <ul class="departure-list">
                    { for schedule
                        .upcoming(now, MAX_DEPARTURES)
                        .into_iter()
                        .map(|departure| departure_row(departure, now)) }
                </ul>
            }
        </CardFrame>
    }
}
