//! Health check endpoint.
//!
//! Healthy means the page still has its clock element and the element
//! shows a value.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use liveclock_core::document::TARGET_SELECTOR;
use serde::Serialize;

use crate::state::AppState;

/// State of the page clock as seen by the health check.
#[derive(Debug, Serialize)]
pub struct ClockHealth {
    /// CSS selector of the clock element.
    pub selector: String,
    /// Whether the page contains the element.
    pub target_present: bool,
    /// The element's text, if present.
    pub displayed: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the clock shows nothing.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Clock element state.
    pub clock: ClockHealth,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let displayed = state.document.text_of(&TARGET_SELECTOR);
    let ticking = displayed.as_deref().is_some_and(|text| !text.is_empty());
    let (code, status) = if ticking {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        clock: ClockHealth {
            selector: TARGET_SELECTOR.css(),
            target_present: displayed.is_some(),
            displayed,
        },
    };
    (code, Json(body))
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
