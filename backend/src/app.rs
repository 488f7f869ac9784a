//! HTTP routes of the dashboard server

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use shared::api::{CONFIG_PATH, HEALTH_LIVE_PATH, HEALTH_READY_PATH, UI_STATE_PATH};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// API routes, without static files or middleware
pub fn api_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health checks
        .route(HEALTH_LIVE_PATH, get(handlers::health::live))
        .route(HEALTH_READY_PATH, get(handlers::health::ready))

        // Client configuration
        .route(CONFIG_PATH, get(handlers::config::get_config))

        // Card data feeds
        .route(
            "/api/cards/:card",
            get(handlers::cards::get_card).put(handlers::cards::publish_card),
        )
        .route(
            "/api/cards/controls/:id/toggle",
            post(handlers::cards::toggle_control),
        )

        // UI state
        .route(UI_STATE_PATH, get(handlers::ui_state::get_ui_state))
        .route("/api/ui/state/:key", post(handlers::ui_state::store_ui_state))

        .with_state(app_state)
}

/// Serve the built frontend, falling back to index.html for client-side routes
pub fn with_frontend(router: Router, frontend_dist: &Path) -> Router {
    if frontend_dist.exists() {
        tracing::info!("Serving frontend from: {}", frontend_dist.display());
        let index = frontend_dist.join("index.html");
        router.fallback_service(ServeDir::new(frontend_dist).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!("Frontend dist not found at: {}", frontend_dist.display());
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use shared::DashboardConfig;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(DashboardConfig::default()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = test_state();
        let app = api_router(state.clone());

        let (status, body) = send(&app, Method::GET, "/health/live", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));

        let (status, body) = send(&app, Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "warming_up");

        state.mark_ready();
        let (status, body) = send(&app, Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_config() {
        let app = api_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/config", None).await;
        assert_eq!(status, StatusCode::OK);
        let config: DashboardConfig = serde_json::from_value(body).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[tokio::test]
    async fn test_card_feed_lifecycle() {
        let app = api_router(test_state());

        let (status, _) = send(&app, Method::GET, "/api/cards/spot-price", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let payload = json!({
            "currency": "EUR",
            "unit": "c/kWh",
            "prices": [{ "starts_at": "2026-10-18T10:00:00Z", "price": 4.2 }]
        });
        let (status, _) = send(&app, Method::PUT, "/api/cards/spot-price", Some(payload)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/api/cards/spot-price", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["prices"][0]["price"], 4.2);
    }

    #[tokio::test]
    async fn test_invalid_payload_rejected() {
        let app = api_router(test_state());
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/cards/sensors",
            Some(json!({ "sensors": "none" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("Sensors"));
    }

    #[tokio::test]
    async fn test_unknown_and_clock_cards() {
        let app = api_router(test_state());

        let (status, body) = send(&app, Method::GET, "/api/cards/stocks", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unknown card: stocks");

        let (status, _) = send(&app, Method::GET, "/api/cards/clock", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_toggle_control_route() {
        let app = api_router(test_state());
        let controls = json!({
            "controls": [{ "id": "lamp", "name": "Lamp", "kind": "toggle" }]
        });
        send(&app, Method::PUT, "/api/cards/controls", Some(controls)).await;

        let toggle = "/api/cards/controls/lamp/toggle";
        let (status, body) = send(&app, Method::POST, toggle, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active"], true);

        let (status, _) = send(&app, Method::POST, "/api/cards/controls/fan/toggle", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ui_state_routes() {
        let app = api_router(test_state());

        let theme = Some(json!("dark"));
        let (status, _) = send(&app, Method::POST, "/api/ui/state/theme", theme).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/api/ui/state", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "theme": "dark" }));

        let bad_key = "/api/ui/state/bad%20key";
        let (status, body) = send(&app, Method::POST, bad_key, Some(json!(1))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert!(body["error"].as_str().unwrap().contains("bad key"));
    }
}
