//! `Scheduler` implementation on tokio intervals.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use liveclock_core::error::ClockError;
use liveclock_core::scheduler::{Scheduler, TimerHandle};
use tokio::task::{JoinHandle, LocalSet};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Runs recurring tasks as local tokio tasks on a shared `LocalSet`.
///
/// Tasks only make progress while the set is being driven (for example via
/// `LocalSet::run_until`). A late tick is delayed rather than followed by a
/// burst of catch-up ticks. Dropping the scheduler aborts every task.
pub struct TokioScheduler {
    local: Rc<LocalSet>,
    next_id: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler spawning onto `local`.
    #[must_use]
    pub fn new(local: Rc<LocalSet>) -> Self {
        Self {
            local,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Number of registered timers.
    #[must_use]
    pub fn active(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(
        &mut self,
        period: Duration,
        mut task: Box<dyn FnMut()>,
    ) -> Result<TimerHandle, ClockError> {
        if period.is_zero() {
            return Err(ClockError::Scheduler("period must be non-zero".into()));
        }

        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        let join = self.local.spawn_local(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                task();
            }
        });

        debug!(%handle, period_ms = period.as_millis(), "recurring timer registered");
        self.tasks.insert(handle, join);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.tasks.remove(&handle) {
            Some(join) => {
                join.abort();
                debug!(%handle, "recurring timer cancelled");
                true
            }
            None => false,
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, join) in self.tasks.drain() {
            join.abort();
        }
    }
}
