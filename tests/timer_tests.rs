use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Duration, Local, TimeZone};
use studylog::core::timer::{Clock, SessionTimer};
use studylog::errors::AppError;

/// Clock whose current time is advanced manually by the tests.
#[derive(Clone)]
struct ManualClock(Rc<RefCell<DateTime<Local>>>);

impl ManualClock {
    fn at(start: DateTime<Local>) -> Self {
        Self(Rc::new(RefCell::new(start)))
    }

    fn advance_secs(&self, secs: i64) {
        *self.0.borrow_mut() += Duration::seconds(secs);
    }

    fn advance_millis(&self, millis: i64) {
        *self.0.borrow_mut() += Duration::milliseconds(millis);
    }

    fn rewind_secs(&self, secs: i64) {
        *self.0.borrow_mut() -= Duration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.0.borrow()
    }
}

fn base_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

#[test]
fn test_stop_after_simulated_advance_yields_exact_elapsed() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    clock.advance_secs(90);
    let (elapsed, start_time) = timer.stop().expect("stop");

    assert_eq!(elapsed, 90);
    assert_eq!(start_time, base_time());
}

#[test]
fn test_check_reports_elapsed_without_changing_state() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    clock.advance_secs(5);
    assert_eq!(timer.check().expect("first check"), 5);

    clock.advance_secs(5);
    assert_eq!(timer.check().expect("second check"), 10);

    // checks did not end the session
    let (elapsed, _) = timer.stop().expect("stop");
    assert_eq!(elapsed, 10);
}

#[test]
fn test_fractional_seconds_truncate_down() {
    let clock = ManualClock::at(base_time());
    let timer = SessionTimer::start_with(clock.clone());

    clock.advance_millis(1999);
    assert_eq!(timer.check().expect("check"), 1);
}

#[test]
fn test_check_after_stop_fails_with_invalid_state() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    clock.advance_secs(1);
    timer.stop().expect("stop");

    let err = timer.check().unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)), "got {err:?}");
}

#[test]
fn test_stop_after_stop_fails_with_invalid_state() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    timer.stop().expect("first stop");

    let err = timer.stop().unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)), "got {err:?}");
}

#[test]
fn test_clock_rollback_fails_with_clock_regression() {
    let clock = ManualClock::at(base_time());
    let timer = SessionTimer::start_with(clock.clone());

    clock.rewind_secs(30);
    let err = timer.check().unwrap_err();
    assert!(matches!(err, AppError::ClockRegression(_)), "got {err:?}");
}

#[test]
fn test_stop_on_rolled_back_clock_does_not_persist_a_duration() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    clock.rewind_secs(1);
    let err = timer.stop().unwrap_err();
    assert!(matches!(err, AppError::ClockRegression(_)), "got {err:?}");
}

#[test]
fn test_start_time_is_the_original_anchor() {
    let clock = ManualClock::at(base_time());
    let timer = SessionTimer::start_with(clock.clone());

    clock.advance_secs(3600);
    assert_eq!(timer.start_time(), base_time());
}

#[test]
fn test_timer_survives_long_interval_of_repeated_checks() {
    let clock = ManualClock::at(base_time());
    let mut timer = SessionTimer::start_with(clock.clone());

    // poll across a simulated multi-hour session
    for _ in 0..100 {
        clock.advance_secs(120);
        timer.check().expect("check");
    }

    let (elapsed, _) = timer.stop().expect("stop");
    assert_eq!(elapsed, 100 * 120);
}
