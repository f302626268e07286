//! `Clock` backed by the JavaScript `Date` object.

use chrono::{DateTime, Utc};
use liveclock_core::clock::Clock;

/// Reads wall-clock time from `Date.now()`.
#[derive(Debug, Clone, Copy)]
pub struct JsDateClock;

impl Clock for JsDateClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }
}
