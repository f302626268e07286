//! Integration tests for the clock updater lifecycle.

use std::sync::Arc;
use std::time::Duration;

use liveclock_core::document::TARGET_SELECTOR;
use liveclock_core::error::ClockError;
use liveclock_core::scheduler::TICK_PERIOD;
use liveclock_core::timestamp::Timestamp;
use liveclock_core::updater::ClockUpdater;
use liveclock_test_support::{AdjustableClock, FixedClock, ManualScheduler, RecordingDocument};

const START_MILLIS: i64 = 1_700_000_000_000;

fn target_document() -> RecordingDocument {
    RecordingDocument::with_test_id("test-user-time")
}

fn updater_with(
    document: &RecordingDocument,
    clock: AdjustableClock,
    scheduler: &ManualScheduler,
) -> ClockUpdater {
    ClockUpdater::locate(document, Arc::new(clock), Box::new(scheduler.clone())).unwrap()
}

#[test]
fn test_end_to_end_fixed_clock_advances_by_one_interval() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);

    // Act
    updater.start().unwrap();
    let after_start = document.target().text();
    clock.advance_millis(1_000);
    let fired = scheduler.advance(Duration::from_millis(1_000));

    // Assert
    assert_eq!(after_start.as_deref(), Some("1700000000000"));
    assert_eq!(fired, 1);
    assert_eq!(scheduler.elapsed(), Duration::from_millis(1_000));
    assert_eq!(document.target().text().as_deref(), Some("1700000001000"));
}

#[test]
fn test_start_displays_time_before_first_interval() {
    // Arrange
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);

    // Act
    updater.start().unwrap();

    // Assert
    assert_eq!(scheduler.fired(), 0);
    let text = document.target().text().unwrap();
    assert!(!text.is_empty());
    assert!(text.parse::<u64>().is_ok());
}

#[test]
fn test_start_registers_one_second_timer() {
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);

    let handle = updater.start().unwrap();

    assert!(updater.is_running());
    assert_eq!(updater.handle(), Some(handle));
    assert_eq!(scheduler.period(handle), Some(TICK_PERIOD));
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_no_tick_before_period_elapses() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);
    updater.start().unwrap();

    // Act
    clock.advance_millis(999);
    let fired = scheduler.advance(Duration::from_millis(999));

    // Assert
    assert_eq!(fired, 0);
    assert_eq!(document.target().writes(), vec!["1700000000000".to_owned()]);
}

#[test]
fn test_displayed_values_strictly_increase_across_natural_ticks() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);
    updater.start().unwrap();

    // Act
    for _ in 0..5 {
        clock.advance_millis(1_000);
        scheduler.advance(TICK_PERIOD);
    }

    // Assert
    let values: Vec<u64> = document
        .target()
        .writes()
        .iter()
        .map(|text| text.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 6);
    assert!(values.windows(2).all(|pair| pair[1] > pair[0]));
    assert!(values.windows(2).all(|pair| pair[1] - pair[0] >= 1_000));
}

#[test]
fn test_tick_is_idempotent_with_frozen_clock() {
    // Arrange
    let document = target_document();
    let clock = Arc::new(FixedClock::at_millis(START_MILLIS));
    let updater =
        ClockUpdater::locate(&document, clock, Box::new(ManualScheduler::new())).unwrap();

    // Act
    let first = updater.tick().unwrap();
    let second = updater.tick().unwrap();

    // Assert
    assert_eq!(first, second);
    let writes = document.target().writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], writes[1]);
}

#[test]
fn test_tick_returns_timestamp_written() {
    let document = target_document();
    let updater = ClockUpdater::locate(
        &document,
        Arc::new(FixedClock::at_millis(START_MILLIS)),
        Box::new(ManualScheduler::new()),
    )
    .unwrap();

    let written = updater.tick().unwrap();

    let expected = Timestamp::from_millis(1_700_000_000_000);
    assert_eq!(written, expected);
    assert_eq!(document.target().text(), Some(expected.to_string()));
}

#[test]
fn test_locate_fails_fast_when_target_missing() {
    // Arrange
    let document = RecordingDocument::empty();

    // Act
    let result = ClockUpdater::locate(
        &document,
        Arc::new(FixedClock::at_millis(START_MILLIS)),
        Box::new(ManualScheduler::new()),
    );

    // Assert
    match result {
        Err(ClockError::TargetNotFound { selector }) => assert_eq!(selector, TARGET_SELECTOR),
        Err(other) => panic!("expected TargetNotFound, got {other:?}"),
        Ok(_) => panic!("expected TargetNotFound, got a running updater"),
    }
}

#[test]
fn test_locate_ignores_elements_with_other_test_ids() {
    let document = RecordingDocument::with_test_id("test-user-name");

    let result = ClockUpdater::locate(
        &document,
        Arc::new(FixedClock::at_millis(START_MILLIS)),
        Box::new(ManualScheduler::new()),
    );

    assert!(matches!(result, Err(ClockError::TargetNotFound { .. })));
}

#[test]
fn test_target_not_found_message_names_selector() {
    let err = ClockError::TargetNotFound {
        selector: TARGET_SELECTOR,
    };

    assert_eq!(
        err.to_string(),
        r#"display target not found: no element matches [data-testid="test-user-time"]"#
    );
}

#[test]
fn test_target_is_located_once() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);

    // Act
    updater.start().unwrap();
    for _ in 0..3 {
        clock.advance_millis(1_000);
        scheduler.advance(TICK_PERIOD);
    }
    updater.stop();
    updater.start().unwrap();

    // Assert
    assert_eq!(document.lookups(), 1);
}

#[test]
fn test_start_twice_is_rejected() {
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);
    updater.start().unwrap();

    let result = updater.start();

    assert_eq!(result, Err(ClockError::AlreadyRunning));
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_stop_cancels_timer_and_freezes_display() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);
    let handle = updater.start().unwrap();

    // Act
    let stopped = updater.stop();
    clock.advance_millis(5_000);
    let fired = scheduler.advance(Duration::from_secs(5));

    // Assert
    assert!(stopped);
    assert!(!updater.is_running());
    assert!(!scheduler.is_scheduled(handle));
    assert_eq!(fired, 0);
    assert_eq!(document.target().text().as_deref(), Some("1700000000000"));
}

#[test]
fn test_stop_when_idle_returns_false() {
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);

    assert!(!updater.stop());
}

#[test]
fn test_drop_cancels_running_timer() {
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);
    updater.start().unwrap();

    drop(updater);

    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_independent_updaters_do_not_share_state() {
    // Arrange
    let first_document = target_document();
    let second_document = target_document();
    let scheduler = ManualScheduler::new();
    let mut first = updater_with(
        &first_document,
        AdjustableClock::at_millis(START_MILLIS),
        &scheduler,
    );
    let mut second = updater_with(&second_document, AdjustableClock::at_millis(42), &scheduler);

    // Act
    first.start().unwrap();
    second.start().unwrap();
    first.stop();
    scheduler.advance(TICK_PERIOD);

    // Assert
    assert_eq!(first_document.target().writes().len(), 1);
    assert_eq!(second_document.target().writes(), vec!["42", "42"]);
}

#[test]
fn test_tick_on_detached_target_fails() {
    let document = target_document();
    let updater = ClockUpdater::locate(
        &document,
        Arc::new(FixedClock::at_millis(START_MILLIS)),
        Box::new(ManualScheduler::new()),
    )
    .unwrap();
    document.target().detach();

    let result = updater.tick();

    assert_eq!(
        result,
        Err(ClockError::TargetDetached {
            selector: TARGET_SELECTOR
        })
    );
}

#[test]
fn test_start_on_detached_target_fails_without_registering_timer() {
    let document = target_document();
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, AdjustableClock::at_millis(START_MILLIS), &scheduler);
    document.target().detach();

    let result = updater.start();

    assert!(matches!(result, Err(ClockError::TargetDetached { .. })));
    assert!(!updater.is_running());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_scheduled_tick_keeps_running_after_target_detaches() {
    // Arrange
    let document = target_document();
    let clock = AdjustableClock::at_millis(START_MILLIS);
    let scheduler = ManualScheduler::new();
    let mut updater = updater_with(&document, clock.clone(), &scheduler);
    updater.start().unwrap();

    // Act
    document.target().detach();
    clock.advance_millis(1_000);
    let fired = scheduler.advance(TICK_PERIOD);

    // Assert
    assert_eq!(fired, 1);
    assert!(updater.is_running());
    assert_eq!(document.target().writes().len(), 1);
}
