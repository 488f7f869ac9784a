use super::{local_time, NOW_TICK};
use crate::components::{CardFrame, CardStatus};
use crate::hooks::{use_card_feed, use_now};
use chrono::{DateTime, Duration, Utc};
use shared::cards::format_price;
use shared::{CardKind, PricePoint, SpotPriceReport};
use yew::prelude::*;

/// How far ahead the bar chart reaches
const CHART_HOURS: i64 = 12;

/// Bar height as a percentage of the tallest bar, never below a sliver
fn bar_height(price: f64, (min, max): (f64, f64)) -> f64 {
    let floor = min.min(0.0);
    let span = max - floor;
    if span <= f64::EPSILON {
        return 100.0;
    }
    (((price - floor) / span) * 100.0).clamp(4.0, 100.0)
}

#[function_component(SpotPriceCard)]
pub fn spot_price_card() -> Html {
    let feed = use_card_feed::<SpotPriceReport>(CardKind::SpotPrice);
    let status = CardStatus::from_feed(feed.loading, feed.data.is_some(), feed.error.as_ref());
    let now = use_now(NOW_TICK);

    html! {
        <CardFrame kind={CardKind::SpotPrice} {status} on_retry={feed.refresh.clone()}>
            if let Some(report) = &feed.data {
                { render_report(report, now) }
            }
        </CardFrame>
    }
}

fn render_report(report: &SpotPriceReport, now: DateTime<Utc>) -> Html {
    let Some(range) = report.range() else {
        return html! { <p class="muted">{ "No prices" }</p> };
    };

    let current = report.current(now);
    let cheapest = report.cheapest_upcoming(now);
    let chart_end = now + Duration::hours(CHART_HOURS);
    let chart: Vec<PricePoint> = report
        .prices
        .iter()
        .filter(|point| point.starts_at <= chart_end)
        .filter(|point| {
            current.map_or(point.starts_at > now, |c| point.starts_at >= c.starts_at)
        })
        .copied()
        .collect();

    html! {
        <>
            <div class="spot-price-now">
                if let Some(current) = current {
                    <span class="spot-price-value">
                        { format_price(current.price, &report.unit) }
                    </span>
                } else {
                    <span class="muted">{ "No current price" }</span>
                }
            </div>
            if let Some(cheapest) = cheapest {
                <div class="spot-price-cheapest muted">
                    { format!(
                        "Cheapest {} at {}",
                        format_price(cheapest.price, &report.unit),
                        local_time(cheapest.starts_at)
                    ) }
                </div>
            }
            <div class="spot-price-chart">
                { for chart.iter().map(|point| {
                    let is_current = current.map_or(false, |c| c.starts_at == point.starts_at);
                    let title = format!(
                        "{} {}",
                        local_time(point.starts_at),
                        format_price(point.price, &report.unit)
                    );
                    html! {
                        <div
                            class={classes!("spot-price-bar", is_current.then_some("current"))}
                            style={format!("height: {:.0}%;", bar_height(point.price, range))}
                            {title}
                        />
                    }
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(10.0, (2.0, 10.0)), 100.0);
        assert_eq!(bar_height(5.0, (2.0, 10.0)), 50.0);
        // Negative prices shift the baseline
        assert_eq!(bar_height(0.0, (-10.0, 10.0)), 50.0);
        assert_eq!(bar_height(-10.0, (-10.0, 10.0)), 4.0);
        assert_eq!(bar_height(0.0, (0.0, 0.0)), 100.0);
    }
}
