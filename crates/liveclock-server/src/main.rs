//! Live clock server entry point.

use std::error::Error;
use std::sync::Arc;

use liveclock_core::clock::SystemClock;
use liveclock_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting live clock server");

    let config = ServerConfig::from_env()?;
    liveclock_server::serve(&config, Arc::new(SystemClock)).await?;

    Ok(())
}
