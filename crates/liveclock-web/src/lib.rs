//! Live Clock Web — browser host for the clock updater.
//!
//! Looks up the target with `document.querySelector`, writes through
//! `Element.textContent`, schedules with `window.setInterval`, and reads
//! time from `Date.now()`. Built for `wasm32-unknown-unknown`; the `start`
//! entry point runs once the module script has loaded.

pub mod clock;
pub mod dom;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
mod entry;

pub use clock::JsDateClock;
pub use dom::{DomDocument, DomTarget};
pub use scheduler::IntervalScheduler;
