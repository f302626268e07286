//! Live Clock server — hosts the profile page and keeps its clock running.

pub mod clock;
pub mod config;
pub mod error;
pub mod facts;
pub mod routes;
pub mod state;

use std::rc::Rc;
use std::sync::Arc;

use liveclock_core::clock::Clock;
use liveclock_page::PageDocument;
use liveclock_page::profile::profile_page;
use tokio::task::LocalSet;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::facts::CatFactClient;
use crate::state::AppState;

/// Build the profile page, start its clock, and serve it until Ctrl-C.
///
/// The clock ticks on a `LocalSet` driven by the same thread that runs the
/// server future, so this must be awaited on a current-thread runtime.
///
/// # Errors
///
/// Returns `AppError` if the page has no clock target, the address is
/// invalid, the fact client cannot be built, or the listener cannot be
/// bound.
pub async fn serve(config: &ServerConfig, clock: Arc<dyn Clock>) -> Result<(), AppError> {
    let document = PageDocument::new(profile_page(&config.profile));
    let local = Rc::new(LocalSet::new());
    let mut updater =
        crate::clock::start_page_clock(&document, Arc::clone(&clock), Rc::clone(&local))?;
    let facts = CatFactClient::new(config.catfact_url.as_str(), config.http_timeout)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET]);
    let state = AppState::new(document, config.profile.clone(), clock, Arc::new(facts));
    let app = routes::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    local
        .run_until(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        })
        .await?;

    updater.stop();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
