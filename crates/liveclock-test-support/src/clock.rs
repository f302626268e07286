//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use liveclock_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock frozen at the given epoch millisecond.
    ///
    /// # Panics
    ///
    /// Panics if `millis` is out of chrono's representable range.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self(Utc.timestamp_millis_opt(millis).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A frozen clock that tests move forward explicitly. Clones share the
/// same time, so a test can keep one handle while the code under test owns
/// another.
#[derive(Debug, Clone)]
pub struct AdjustableClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl AdjustableClock {
    /// A clock starting at the given epoch millisecond.
    ///
    /// # Panics
    ///
    /// Panics if `millis` is out of chrono's representable range.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self {
            now: Arc::new(Mutex::new(Utc.timestamp_millis_opt(millis).unwrap())),
        }
    }

    /// Move the clock forward by `millis` milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn advance_millis(&self, millis: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::milliseconds(millis);
    }
}

impl Clock for AdjustableClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
