//! Wiring of the clock updater onto the served page.

use std::rc::Rc;
use std::sync::Arc;

use liveclock_core::clock::Clock;
use liveclock_core::error::ClockError;
use liveclock_core::updater::ClockUpdater;
use liveclock_page::PageDocument;
use liveclock_runtime::TokioScheduler;
use tokio::task::LocalSet;

/// Locate the clock target on `document` and start ticking on `local`.
///
/// # Errors
///
/// Returns `ClockError::TargetNotFound` if the page has no clock element.
pub fn start_page_clock(
    document: &PageDocument,
    clock: Arc<dyn Clock>,
    local: Rc<LocalSet>,
) -> Result<ClockUpdater, ClockError> {
    let mut updater = ClockUpdater::locate(document, clock, Box::new(TokioScheduler::new(local)))?;
    updater.start()?;
    Ok(updater)
}
