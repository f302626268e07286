//! `Scheduler` backed by `window.setInterval`.

use std::collections::HashMap;
use std::time::Duration;

use liveclock_core::error::ClockError;
use liveclock_core::scheduler::{Scheduler, TimerHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Registers recurring callbacks with the browser's interval timers.
///
/// Callbacks stay alive for as long as their interval is registered;
/// cancelling clears the interval and drops the callback.
pub struct IntervalScheduler {
    window: Window,
    timers: HashMap<TimerHandle, (i32, Closure<dyn FnMut()>)>,
    next_id: u64,
}

impl IntervalScheduler {
    /// Create a scheduler on `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self {
            window,
            timers: HashMap::new(),
            next_id: 0,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule_repeating(
        &mut self,
        period: Duration,
        task: Box<dyn FnMut()>,
    ) -> Result<TimerHandle, ClockError> {
        let timeout = i32::try_from(period.as_millis())
            .map_err(|_| ClockError::Scheduler(format!("period {period:?} exceeds i32 milliseconds")))?;
        if timeout == 0 {
            return Err(ClockError::Scheduler("period must be non-zero".into()));
        }

        let callback = Closure::wrap(task);
        let interval_id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|err| ClockError::Scheduler(format!("setInterval failed: {err:?}")))?;

        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.timers.insert(handle, (interval_id, callback));
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.timers.remove(&handle) {
            Some((interval_id, _callback)) => {
                self.window.clear_interval_with_handle(interval_id);
                true
            }
            None => false,
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for (_, (interval_id, _callback)) in self.timers.drain() {
            self.window.clear_interval_with_handle(interval_id);
        }
    }
}
