use super::{updated_label, NOW_TICK};
use crate::components::{CardFrame, CardStatus};
use crate::hooks::{use_card_feed, use_now};
use chrono::Duration;
use shared::{CardKind, SensorsReport};
use yew::prelude::*;

/// Readings older than this are dimmed
const STALE_AFTER_MINUTES: i64 = 15;

#[function_component(SensorsCard)]
pub fn sensors_card() -> Html {
    let feed = use_card_feed::<SensorsReport>(CardKind::Sensors);
    let status = CardStatus::from_feed(feed.loading, feed.data.is_some(), feed.error.as_ref());
    let now = use_now(NOW_TICK);
    let max_age = Duration::minutes(STALE_AFTER_MINUTES);

    html! {
        <CardFrame kind={CardKind::Sensors} {status} on_retry={feed.refresh.clone()}>
            if let Some(report) = &feed.data {
                if report.sensors.is_empty() {
                    <p class="muted">{ "No sensors" }</p>
                } else {
                    <ul class="sensor-list">
                        { for report.sensors.iter().map(|reading| {
                            let stale = reading.is_stale(now, max_age);
                            html! {
                                <li
                                    key={reading.id.clone()}
                                    class={classes!("sensor-reading", stale.then_some("stale"))}
                                    title={updated_label(reading.updated_at, now)}
                                >
                                    <span class="sensor-name">{ &reading.name }</span>
                                    <span class="sensor-value">{ reading.display_value() }</span>
                                </li>
                            }
                        }) }
                    </ul>
                }
            }
        </CardFrame>
    }
}
