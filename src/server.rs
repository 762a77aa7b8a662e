use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;

use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::order::{OrderStatus, StatusValue};
use crate::ui::app::render_preview_page;
use crate::ui::components::{BadgeSize, StatusDisplay, render_status_badge};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "badge.config.loaded",
        default_size = config.badge.default_size.as_str(),
        request_timeout_secs = config.server.request_timeout_secs,
        "Badge configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let timeout_duration = Duration::from_secs(state.config.server.request_timeout_secs);

    let router = Router::new()
        .route("/", get(preview_handler))
        .route("/health", get(health_handler))
        .route("/badge/{status}", get(badge_handler))
        .route("/api/statuses", get(api_statuses))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    with_timeout(router, timeout_duration)
}

/// Answer `408 Request Timeout` for any request still running after `duration`.
pub fn with_timeout(router: Router, duration: Duration) -> Router {
    router.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(duration, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Preview of every badge.
async fn preview_handler() -> Html<String> {
    Html(render_preview_page())
}

/// GET /health - Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}

/// Query parameters for the badge fragment.
#[derive(Debug, Deserialize)]
struct BadgeQuery {
    /// Badge size, falls back to the configured default.
    #[serde(default)]
    size: Option<BadgeSize>,
}

/// GET /badge/:status - Badge fragment for HTMX swaps.
async fn badge_handler(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Query(query): Query<BadgeQuery>,
) -> Html<String> {
    let status = StatusValue::from(status);
    let size = query.size.unwrap_or(state.config.badge.default_size);

    debug!(
        name: "badge.rendered",
        status = %status,
        known = status.known().is_some(),
        size = size.as_str(),
        "Rendering status badge"
    );

    Html(render_status_badge(status, size))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Display table entry for the JSON API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusEntry {
    /// Wire name of the status.
    pub status: OrderStatus,
    /// Human-readable text.
    pub label: String,
    /// Style-class token resolved by the stylesheet.
    pub style_class: String,
    /// Short glyph shown before the label.
    pub icon: String,
}

impl From<OrderStatus> for StatusEntry {
    fn from(status: OrderStatus) -> Self {
        let display = StatusDisplay::of(status);
        Self {
            status,
            label: display.label.into_owned(),
            style_class: display.style_class.to_string(),
            icon: display.icon.to_string(),
        }
    }
}

/// GET /api/statuses - Display table for every known status.
async fn api_statuses() -> Json<Vec<StatusEntry>> {
    Json(OrderStatus::ALL.into_iter().map(StatusEntry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BadgeConfig, ServerConfig};
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use tower::ServiceExt;

    fn test_state(default_size: BadgeSize) -> AppState {
        AppState::new(Arc::new(AppConfig {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                request_timeout_secs: 5,
            },
            badge: BadgeConfig { default_size },
        }))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn badge_uses_configured_default_size() {
        let app = build_router(test_state(BadgeSize::Medium));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/badge/accepted")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("✅ Accepted"));
        assert!(html.contains("text-xs px-2.5 py-1"));
    }

    #[tokio::test]
    async fn invalid_size_is_rejected() {
        let app = build_router(test_state(BadgeSize::Small));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/badge/accepted?size=huge")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn slow_request_times_out() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                "late"
            }),
        );
        let app = with_timeout(slow, Duration::from_millis(1));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/slow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_text(response).await, "Request timed out");
    }

    #[tokio::test]
    async fn fast_request_passes_timeout() {
        let app = with_timeout(
            Router::new().route("/fast", get(|| async { "done" })),
            Duration::from_secs(5),
        );

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/fast")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "done");
    }

    #[test]
    fn status_entry_copies_display_table() {
        let entry = StatusEntry::from(OrderStatus::PickedUp);
        assert_eq!(entry.label, "On the Way");
        assert_eq!(entry.style_class, "status-pickedUp");
        assert_eq!(entry.icon, "🛵");
    }
}
