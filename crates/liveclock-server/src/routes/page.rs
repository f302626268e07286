//! The hosted profile page.

use axum::extract::State;
use axum::response::Html;
use axum::{Router, routing::get};
use tracing::instrument;

use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn profile(State(state): State<AppState>) -> Html<String> {
    Html(state.document.render())
}

/// Returns the router serving the page.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile))
}
