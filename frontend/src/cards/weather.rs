use super::{local_time, updated_label, NOW_TICK};
use crate::components::{CardFrame, CardStatus};
use crate::hooks::{use_card_feed, use_now};
use shared::cards::format_temperature;
use shared::{CardKind, ForecastEntry, WeatherReport};
use yew::prelude::*;

const FORECAST_ENTRIES: usize = 5;

#[function_component(WeatherCard)]
pub fn weather_card() -> Html {
    let feed = use_card_feed::<WeatherReport>(CardKind::Weather);
    let status = CardStatus::from_feed(feed.loading, feed.data.is_some(), feed.error.as_ref());
    let now = use_now(NOW_TICK);
    let subtitle = feed
        .data
        .as_ref()
        .map(|report| format!("{} · {}", report.location, updated_label(report.updated_at, now)));

    html! {
        <CardFrame kind={CardKind::Weather} {status} {subtitle} on_retry={feed.refresh.clone()}>
            if let Some(report) = &feed.data {
                <>
                    <div class="weather-now">
                        <span class="weather-icon" title={report.condition.label()}>
                            { report.condition.icon() }
                        </span>
                        <span class="weather-temperature">
                            { format_temperature(report.temperature_c) }
                        </span>
                        <div class="weather-details muted">
                            <span>{ report.condition.label() }</span>
                            if let Some(feels_like) = report.feels_like_c {
                                <span>
                                    { format!("Feels like {}", format_temperature(feels_like)) }
                                </span>
                            }
                            if let Some(humidity) = report.humidity_pct {
                                <span>{ format!("{:.0}% humidity", humidity) }</span>
                            }
                            if let Some(wind) = report.wind_speed_ms {
                                <span>{ format!("{:.1} m/s", wind) }</span>
                            }
                        </div>
                    </div>
                    <ul class="weather-forecast">
                        { for report
                            .upcoming_forecast(now, FORECAST_ENTRIES)
                            .into_iter()
                            .map(forecast_entry) }
                    </ul>
                </>
            }
        </CardFrame>
    }
}

fn forecast_entry(entry: &ForecastEntry) -> Html {
    html! {
        <li class="forecast-entry">
            <span class="forecast-time muted">{ local_time(entry.time) }</span>
            <span class="forecast-icon">{ entry.condition.icon() }</span>
            <span class="forecast-temperature">{ format_temperature(entry.temperature_c) }</span>
        </li>
    }
}
