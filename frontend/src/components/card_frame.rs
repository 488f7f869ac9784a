//! Card Frame Component
//!
//! Common chrome for every dashboard card: title bar, loading spinner and
//! inline error banner. A card's failures are rendered here and never leave
//! the card.

use shared::{ApiError, CardKind};
use yew::prelude::*;

/// What the frame shows around (or instead of) the card body
#[derive(Clone, Debug, PartialEq)]
pub enum CardStatus {
    /// Nothing to show yet
    Loading,
    /// Last fetch failed; `stale` means older content is still displayed
    Failed { error: ApiError, stale: bool },
    Ready,
}

impl CardStatus {
    /// Derive the frame status from a feed's state
    pub fn from_feed(loading: bool, has_data: bool, error: Option<&ApiError>) -> Self {
        match error {
            Some(error) => CardStatus::Failed {
                error: error.clone(),
                stale: has_data,
            },
            None if loading && !has_data => CardStatus::Loading,
            None => CardStatus::Ready,
        }
    }

    fn shows_body(&self) -> bool {
        match self {
            CardStatus::Loading => false,
            CardStatus::Failed { stale, .. } => *stale,
            CardStatus::Ready => true,
        }
    }
}

/// Short user-facing text for a card error
pub fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound(_) => "No data yet".to_string(),
        ApiError::Network(_) => "Server unreachable".to_string(),
        ApiError::Server { status, .. } => format!("Server error ({})", status),
        ApiError::Parse(_) => "Unexpected data".to_string(),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardFrameProps {
    pub kind: CardKind,
    pub status: CardStatus,
    /// Optional right-aligned text in the title bar (e.g. last update)
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(CardFrame)]
pub fn card_frame(props: &CardFrameProps) -> Html {
    let kind = props.kind;
    let style = format!("grid-column: span {} / span {};", kind.grid_span(), kind.grid_span());
    let id = format!("card-{}", kind.slug());
    let class = classes!("card", id.clone());

    let on_retry = props.on_retry.clone().map(|on_retry| {
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    });

    html! {
        <section {id} {class} {style}>
            <header class="card-header">
                <h2 class="card-title">{ kind.title() }</h2>
                if let Some(subtitle) = &props.subtitle {
                    <span class="card-subtitle muted">{ subtitle }</span>
                }
            </header>

            if let CardStatus::Failed { error, .. } = &props.status {
                <div class="card-error" title={error.to_string()}>
                    <span>{ error_message(error) }</span>
                    if let Some(on_retry) = on_retry {
                        <button class="card-retry" onclick={on_retry}>{ "Retry" }</button>
                    }
                </div>
            }

            if props.status == CardStatus::Loading {
                <div class="card-loading">
                    <div class="spinner"></div>
                </div>
            }

            if props.status.shows_body() {
                <div class="card-body">
                    { props.children.clone() }
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_only_before_first_payload() {
        assert_eq!(CardStatus::from_feed(true, false, None), CardStatus::Loading);
        assert_eq!(CardStatus::from_feed(true, true, None), CardStatus::Ready);
        assert_eq!(CardStatus::from_feed(false, true, None), CardStatus::Ready);
    }

    #[test]
    fn failure_keeps_stale_content() {
        let error = ApiError::Network("offline".into());
        let status = CardStatus::from_feed(false, true, Some(&error));
        assert!(status.shows_body());
        assert!(!CardStatus::from_feed(false, false, Some(&error)).shows_body());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(&ApiError::NotFound("x".into())), "No data yet");
        assert_eq!(
            error_message(&ApiError::Server {
                status: 503,
                message: String::new()
            }),
            "Server error (503)"
        );
    }
}
