//! Live Clock Runtime — native infrastructure for the clock updater.
//!
//! Scheduled tasks run on a `tokio::task::LocalSet`, so every tick executes
//! on the thread driving that set and ticks never overlap.

pub mod scheduler;

pub use scheduler::TokioScheduler;
