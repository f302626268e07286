//! Live Clock Core — shared abstractions and the clock updater.
//!
//! This crate defines the traits a host (browser or native page) implements
//! and the `ClockUpdater` that drives them. It contains no infrastructure
//! code.

pub mod clock;
pub mod document;
pub mod error;
pub mod scheduler;
pub mod timestamp;
pub mod updater;
