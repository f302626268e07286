//! Shared application state.

use std::sync::Arc;

use liveclock_core::clock::Clock;
use liveclock_page::PageDocument;
use liveclock_page::profile::Profile;

use crate::facts::FactSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The served page. Handlers only read it; the clock updater writes.
    pub document: PageDocument,
    /// The person the page and `/me` describe.
    pub profile: Profile,
    /// Time source for `/me` timestamps.
    pub clock: Arc<dyn Clock>,
    /// Where `/me` gets its cat fact.
    pub facts: Arc<dyn FactSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        document: PageDocument,
        profile: Profile,
        clock: Arc<dyn Clock>,
        facts: Arc<dyn FactSource>,
    ) -> Self {
        Self {
            document,
            profile,
            clock,
            facts,
        }
    }
}
