//! Profile endpoint: who this page belongs to, plus a cat fact.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use chrono::SecondsFormat;
use serde::Serialize;
use tracing::instrument;

use crate::facts::fact_or_fallback;
use crate::state::AppState;

/// Profile fields returned by GET /me.
#[derive(Debug, Serialize)]
pub struct UserBody {
    /// Contact address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Technology stack.
    pub stack: String,
}

/// Response body for GET /me.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Always `success`; fact lookup failures are absorbed.
    pub status: &'static str,
    /// The configured profile.
    pub user: UserBody,
    /// Request time as UTC ISO-8601 with millisecond precision.
    pub timestamp: String,
    /// A cat fact, or the fallback sentence.
    pub fact: String,
}

/// GET /me
#[instrument(skip(state))]
async fn me(State(state): State<AppState>) -> Json<MeResponse> {
    let fact = fact_or_fallback(state.facts.as_ref()).await;
    let profile = state.profile;

    Json(MeResponse {
        status: "success",
        user: UserBody {
            email: profile.email,
            name: profile.name,
            stack: profile.stack,
        },
        timestamp: state.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        fact,
    })
}

/// Returns the router for the profile endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
