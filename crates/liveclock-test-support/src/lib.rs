//! Shared test doubles for the live clock crates.

mod clock;
mod document;
mod scheduler;

pub use clock::{AdjustableClock, FixedClock};
pub use document::{RecordingDocument, RecordingTarget};
pub use scheduler::ManualScheduler;
