use crate::components::{CardFrame, CardStatus};
use crate::hooks::use_card_feed;
use crate::utils;
use gloo_net::http::Request;
use shared::api::control_toggle_path;
use shared::{CardKind, Control, ControlKind, ControlsReport};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ControlsCard)]
pub fn controls_card() -> Html {
    let feed = use_card_feed::<ControlsReport>(CardKind::Controls);
    let status = CardStatus::from_feed(feed.loading, feed.data.is_some(), feed.error.as_ref());

    // Apply the toggle locally right away, then replace it with the state the
    // server returns. A failed request re-fetches so the card shows the real
    // state.
    let on_toggle = {
        let report = feed.data.clone();
        let set_data = feed.set_data.clone();
        let refresh = feed.refresh.clone();

        Callback::from(move |control_id: String| {
            let optimistic = report.clone().map(|mut report| {
                report.toggle(&control_id);
                set_data.emit(report.clone());
                report
            });

            let set_data = set_data.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let api_endpoint = utils::api_url(&control_toggle_path(&control_id));
                match Request::post(&api_endpoint).send().await {
                    Ok(response) if response.ok() => {
                        let confirmed = response.json::<Control>().await.ok().zip(optimistic);
                        let Some((control, mut report)) = confirmed else {
                            refresh.emit(());
                            return;
                        };
                        if report.apply(&control) {
                            log::debug!("Control {} is now active={}", control.id, control.active);
                            set_data.emit(report);
                        } else {
                            refresh.emit(());
                        }
                    }
                    Ok(response) => {
                        log::error!(
                            "Failed to toggle control {}: status {}",
                            control_id,
                            response.status()
                        );
                        refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("Failed to toggle control {}: {:?}", control_id, e);
                        refresh.emit(());
                    }
                }
            });
        })
    };

    html! {
        <CardFrame kind={CardKind::Controls} {status} on_retry={feed.refresh.clone()}>
            if let Some(report) = &feed.data {
                <div class="control-grid">
                    { for report.controls.iter().map(|control| html! {
                        <ControlButton
                            key={control.id.clone()}
                            control={control.clone()}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            }
        </CardFrame>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ControlButtonProps {
    control: Control,
    on_toggle: Callback<String>,
}

#[function_component(ControlButton)]
fn control_button(props: &ControlButtonProps) -> Html {
    let control = &props.control;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let control_id = control.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(control_id.clone()))
    };

    let kind_class = match control.kind {
        ControlKind::Toggle => "control-toggle",
        ControlKind::Scene => "control-scene",
    };

    html! {
        <button
            class={classes!("control-button", kind_class, control.active.then_some("active"))}
            aria-pressed={control.active.to_string()}
            {onclick}
        >
            { &control.name }
        </button>
    }
}
