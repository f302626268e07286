//! The clock updater: keeps one element's text in sync with wall-clock time.
//!
//! Lifecycle: [`ClockUpdater::locate`] acquires the display target (failing
//! fast when it is absent), [`ClockUpdater::start`] writes the current time
//! immediately and registers a recurring tick, and [`ClockUpdater::stop`]
//! cancels it. The target handle is acquired once and never reassigned.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::clock::Clock;
use crate::document::{DisplayTarget, Document, Selector, TARGET_SELECTOR};
use crate::error::ClockError;
use crate::scheduler::{Scheduler, TICK_PERIOD, TimerHandle};
use crate::timestamp::Timestamp;

type SharedTarget = Rc<RefCell<dyn DisplayTarget>>;

/// Owns the display target and the recurring timer that refreshes it.
pub struct ClockUpdater {
    clock: Arc<dyn Clock>,
    scheduler: Box<dyn Scheduler>,
    selector: Selector,
    target: SharedTarget,
    handle: Option<TimerHandle>,
}

impl ClockUpdater {
    /// Locate the display target in `document` and build an idle updater.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::TargetNotFound` if no element matches the
    /// target selector.
    pub fn locate<D: Document>(
        document: &D,
        clock: Arc<dyn Clock>,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self, ClockError> {
        let selector = TARGET_SELECTOR;
        let Some(target) = document.locate(&selector) else {
            error!(%selector, "display target not found");
            return Err(ClockError::TargetNotFound { selector });
        };
        debug!(%selector, "display target located");

        let target: SharedTarget = Rc::new(RefCell::new(target));
        Ok(Self {
            clock,
            scheduler,
            selector,
            target,
            handle: None,
        })
    }

    /// Write the current time immediately, then every [`TICK_PERIOD`].
    ///
    /// # Errors
    ///
    /// Returns `ClockError::AlreadyRunning` if a timer is already registered,
    /// `ClockError::TargetDetached` if the immediate write fails, or
    /// `ClockError::Scheduler` if the host refuses the timer.
    pub fn start(&mut self) -> Result<TimerHandle, ClockError> {
        if self.handle.is_some() {
            return Err(ClockError::AlreadyRunning);
        }

        let first = self.tick()?;

        let clock = Arc::clone(&self.clock);
        let target = Rc::clone(&self.target);
        let selector = self.selector;
        let handle = self.scheduler.schedule_repeating(
            TICK_PERIOD,
            Box::new(move || {
                if let Err(err) = write_now(clock.as_ref(), &target, selector) {
                    error!(%selector, error = %err, "scheduled tick failed");
                }
            }),
        )?;

        info!(%selector, %handle, first = %first, "clock updater started");
        self.handle = Some(handle);
        Ok(handle)
    }

    /// Cancel the recurring tick. Returns `false` if the updater was idle.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        let cancelled = self.scheduler.cancel(handle);
        info!(selector = %self.selector, %handle, cancelled, "clock updater stopped");
        true
    }

    /// Read the clock once and write it into the target.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::TargetDetached` if the target has been removed
    /// from its document.
    pub fn tick(&self) -> Result<Timestamp, ClockError> {
        write_now(self.clock.as_ref(), &self.target, self.selector)
    }

    /// Returns `true` while a recurring timer is registered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The registered timer, if running.
    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }
}

impl Drop for ClockUpdater {
    fn drop(&mut self) {
        self.stop();
    }
}

fn write_now(
    clock: &dyn Clock,
    target: &RefCell<dyn DisplayTarget>,
    selector: Selector,
) -> Result<Timestamp, ClockError> {
    let now = clock.timestamp();
    target
        .borrow_mut()
        .set_text(&now.to_string())
        .map_err(|_| ClockError::TargetDetached { selector })?;
    Ok(now)
}
