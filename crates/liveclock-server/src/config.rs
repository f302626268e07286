//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use liveclock_page::profile::Profile;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PROFILE_NAME: &str = "Live Clock User";
const DEFAULT_PROFILE_EMAIL: &str = "user@example.com";
const DEFAULT_PROFILE_STACK: &str = "Rust/Axum";
const DEFAULT_CATFACT_URL: &str = "https://catfact.ninja/fact";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Person shown on the card and returned by `/me`
    /// (`PROFILE_NAME`, `PROFILE_EMAIL`, `PROFILE_STACK`).
    pub profile: Profile,
    /// Cat fact endpoint (`CATFACT_URL`).
    pub catfact_url: String,
    /// Timeout for the cat fact request (`HTTP_TIMEOUT`, in seconds).
    pub http_timeout: Duration,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `HTTP_TIMEOUT` is invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16` or
    /// `HTTP_TIMEOUT` is not a positive number of seconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let http_timeout = match lookup("HTTP_TIMEOUT") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            host: or_default("HOST", DEFAULT_HOST),
            port,
            profile: Profile {
                name: or_default("PROFILE_NAME", DEFAULT_PROFILE_NAME),
                email: or_default("PROFILE_EMAIL", DEFAULT_PROFILE_EMAIL),
                stack: or_default("PROFILE_STACK", DEFAULT_PROFILE_STACK),
            },
            catfact_url: or_default("CATFACT_URL", DEFAULT_CATFACT_URL),
            http_timeout,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: f64 = raw
        .parse()
        .map_err(|e| AppError::Config(format!("HTTP_TIMEOUT must be a number of seconds: {e}")))?;
    if secs <= 0.0 {
        return Err(AppError::Config("HTTP_TIMEOUT must be positive".into()));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| AppError::Config(format!("HTTP_TIMEOUT is out of range: {e}")))
}
