//! Wall-clock source read on every tick.
//!
//! The updater never caches a reading: each tick asks the clock again, so
//! tests can freeze or step time by swapping the implementation.

use chrono::{DateTime, Utc};

use crate::timestamp::Timestamp;

/// Source of wall-clock time for ticks and response timestamps.
pub trait Clock: Send + Sync {
    /// The instant of this call.
    fn now(&self) -> DateTime<Utc>;

    /// The instant of this call as an epoch-millisecond [`Timestamp`].
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now())
    }
}

/// Reads the operating system's real-time clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
