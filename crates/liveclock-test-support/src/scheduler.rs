//! Test scheduler — a manual stepper standing in for real timers.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use liveclock_core::error::ClockError;
use liveclock_core::scheduler::{Scheduler, TimerHandle};

struct Timer {
    handle: TimerHandle,
    period: Duration,
    next_due: Duration,
    task: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct State {
    elapsed: Duration,
    next_id: u64,
    fired: usize,
    timers: Vec<Timer>,
}

/// A scheduler whose virtual time only moves when a test calls
/// [`ManualScheduler::advance`]. Clones share the same timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<State>>,
}

impl ManualScheduler {
    /// Create a scheduler at virtual time zero with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward by `by`, firing every timer that falls due
    /// in order. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.state.borrow().elapsed + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter_mut()
                    .filter(|timer| timer.next_due <= until && timer.task.is_some())
                    .min_by_key(|timer| (timer.next_due, timer.handle))
                    .map(|timer| {
                        let due_at = timer.next_due;
                        timer.next_due += timer.period;
                        (due_at, timer.handle, timer.task.take())
                    });
                if let Some((due_at, _, _)) = due {
                    state.elapsed = due_at;
                }
                due
            };
            let Some((_, handle, Some(mut task))) = next else {
                break;
            };

            task();
            fired += 1;

            let mut state = self.state.borrow_mut();
            state.fired += 1;
            if let Some(timer) = state.timers.iter_mut().find(|timer| timer.handle == handle) {
                timer.task = Some(task);
            }
        }

        self.state.borrow_mut().elapsed = until;
        fired
    }

    /// Number of registered timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Returns `true` if `handle` is still registered.
    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.state
            .borrow()
            .timers
            .iter()
            .any(|timer| timer.handle == handle)
    }

    /// Period of a registered timer.
    #[must_use]
    pub fn period(&self, handle: TimerHandle) -> Option<Duration> {
        self.state
            .borrow()
            .timers
            .iter()
            .find(|timer| timer.handle == handle)
            .map(|timer| timer.period)
    }

    /// Total tasks run since creation.
    #[must_use]
    pub fn fired(&self) -> usize {
        self.state.borrow().fired
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.state.borrow().elapsed
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(
        &mut self,
        period: Duration,
        task: Box<dyn FnMut()>,
    ) -> Result<TimerHandle, ClockError> {
        if period.is_zero() {
            return Err(ClockError::Scheduler("period must be non-zero".into()));
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let handle = TimerHandle::new(state.next_id);
        let next_due = state.elapsed + period;
        state.timers.push(Timer {
            handle,
            period,
            next_due,
            task: Some(task),
        });
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.timers.len();
        state.timers.retain(|timer| timer.handle != handle);
        state.timers.len() != before
    }
}
