//! HTTP routes.

pub mod clock;
pub mod health;
pub mod me;
pub mod page;

use axum::Router;

use crate::state::AppState;

/// The full application router, without middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(page::router())
        .merge(me::router())
        .merge(clock::router())
        .with_state(state)
}
