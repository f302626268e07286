//! Clock error types.

use thiserror::Error;

use crate::document::Selector;

/// Top-level error type for the clock updater.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// No element in the document matches the selector.
    #[error("display target not found: no element matches {selector}")]
    TargetNotFound {
        /// The selector that was looked up.
        selector: Selector,
    },

    /// The located element was removed from its document.
    #[error("display target {selector} is no longer attached to the document")]
    TargetDetached {
        /// The selector the element was located with.
        selector: Selector,
    },

    /// `start` was called on an updater that is already running.
    #[error("clock updater is already running")]
    AlreadyRunning,

    /// The host refused to register the recurring timer.
    #[error("scheduler error: {0}")]
    Scheduler(String),
}
