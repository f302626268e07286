//! Cat fact lookup for the `/me` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, warn};

/// Served in place of a fact whenever the upstream lookup fails.
pub const FALLBACK_FACT: &str = "Cat fact could not be retrieved at this time.";

/// Why a fact could not be fetched.
#[derive(Debug, Error)]
pub enum FactError {
    /// Transport failure, timeout, or an undecodable body.
    #[error("cat fact request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with something other than 200.
    #[error("cat fact service returned status {0}")]
    Status(u16),

    /// Upstream answered 200 without a `fact` field.
    #[error("cat fact response has no fact")]
    MissingFact,
}

/// A source of cat facts.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one fact.
    async fn fetch_fact(&self) -> Result<String, FactError>;
}

#[derive(Debug, Deserialize)]
struct FactBody {
    fact: Option<String>,
}

/// Fetches facts over HTTP from a catfact.ninja compatible endpoint.
#[derive(Debug, Clone)]
pub struct CatFactClient {
    client: reqwest::Client,
    url: String,
}

impl CatFactClient {
    /// Build a client for `url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `FactError::Request` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FactError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    async fn fetch_fact(&self) -> Result<String, FactError> {
        let response = self.client.get(&self.url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FactError::Status(response.status().as_u16()));
        }
        let body: FactBody = response.json().await?;
        body.fact.ok_or(FactError::MissingFact)
    }
}

/// Fetch a fact from `source`, logging any failure and substituting
/// [`FALLBACK_FACT`].
pub async fn fact_or_fallback(source: &dyn FactSource) -> String {
    match source.fetch_fact().await {
        Ok(fact) => fact,
        Err(FactError::Status(status)) => {
            warn!(status, "cat fact service returned non-200 status");
            FALLBACK_FACT.to_string()
        }
        Err(err) => {
            error!(error = %err, "failed to fetch cat fact");
            FALLBACK_FACT.to_string()
        }
    }
}
