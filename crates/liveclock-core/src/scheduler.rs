//! Recurring timer abstraction.
//!
//! Hosts run scheduled tasks on their single event thread, so tasks carry no
//! `Send` bound. Tests inject a manual stepper in place of real timers.

use std::fmt;
use std::time::Duration;

use crate::error::ClockError;

/// Period between two clock ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Identity of a registered recurring timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a host-assigned timer id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Abstraction over the host's recurring timer primitive.
pub trait Scheduler {
    /// Run `task` every `period`, first firing one period from now.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Scheduler` if the host cannot register the timer.
    fn schedule_repeating(
        &mut self,
        period: Duration,
        task: Box<dyn FnMut()>,
    ) -> Result<TimerHandle, ClockError>;

    /// Cancel a timer. Returns `false` if the handle was not registered.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
