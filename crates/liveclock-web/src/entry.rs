//! wasm entry points.

use std::cell::RefCell;
use std::sync::Arc;

use liveclock_core::updater::ClockUpdater;
use wasm_bindgen::prelude::*;

use crate::{DomDocument, IntervalScheduler, JsDateClock};

thread_local! {
    static UPDATER: RefCell<Option<ClockUpdater>> = const { RefCell::new(None) };
}

/// Locate the clock element and start updating it.
///
/// # Errors
///
/// Rejects with a descriptive message if there is no window or document,
/// or if the target element is missing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let mut updater = ClockUpdater::locate(
        &DomDocument::new(document),
        Arc::new(JsDateClock),
        Box::new(IntervalScheduler::new(window)),
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let handle = updater
        .start()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    web_sys::console::info_1(&JsValue::from_str(&format!("live clock started ({handle})")));
    UPDATER.with(|slot| *slot.borrow_mut() = Some(updater));
    Ok(())
}

/// Stop the running clock. Returns `false` if it was not running.
#[wasm_bindgen]
pub fn stop() -> bool {
    UPDATER.with(|slot| slot.borrow_mut().take().is_some_and(|mut updater| updater.stop()))
}
