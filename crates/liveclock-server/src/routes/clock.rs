//! Read-only view of the displayed clock value.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use liveclock_core::document::TARGET_SELECTOR;
use liveclock_core::error::ClockError;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /api/v1/clock.
#[derive(Debug, Serialize)]
pub struct ClockResponse {
    /// CSS selector of the clock element.
    pub selector: String,
    /// The element's current text: an epoch-millisecond timestamp, or empty
    /// before the first tick.
    pub text: String,
}

/// GET /api/v1/clock
#[instrument(skip(state))]
async fn displayed_time(State(state): State<AppState>) -> Result<Json<ClockResponse>, ApiError> {
    let text = state
        .document
        .text_of(&TARGET_SELECTOR)
        .ok_or(ClockError::TargetNotFound {
            selector: TARGET_SELECTOR,
        })?;

    debug!(%text, "serving displayed time");

    Ok(Json(ClockResponse {
        selector: TARGET_SELECTOR.css(),
        text,
    }))
}

/// Returns the router for the clock view.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/clock", get(displayed_time))
}
