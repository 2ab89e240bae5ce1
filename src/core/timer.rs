//! Session timer: measures elapsed wall-clock time for one study session.
//!
//! The anchor is a wall-clock timestamp rather than a monotonic instant: a
//! session keeps accruing time while the process is suspended, as long as the
//! wall clock keeps advancing. The flip side is that a clock rollback must be
//! reported instead of producing a negative or wrapped duration.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};

/// Source of wall-clock timestamps, injectable so the timer can be driven by
/// a fixed clock in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, PartialEq)]
enum TimerState {
    Running,
    Stopped,
}

/// State machine for a single study session: started once, checked any number
/// of times, stopped once. `start` is the only constructor, so an idle timer
/// is never observable; once stopped the timer is inert and every further
/// operation fails.
pub struct SessionTimer<C: Clock> {
    clock: C,
    start_time: DateTime<Local>,
    state: TimerState,
}

impl SessionTimer<SystemClock> {
    pub fn start() -> Self {
        Self::start_with(SystemClock)
    }
}

impl<C: Clock> SessionTimer<C> {
    /// Starts the timer on the given clock source, capturing the start anchor.
    pub fn start_with(clock: C) -> Self {
        let start_time = clock.now();
        Self {
            clock,
            start_time,
            state: TimerState::Running,
        }
    }

    pub fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    /// Elapsed whole seconds since the start anchor. Does not change state and
    /// can be called any number of times while the timer runs.
    pub fn check(&self) -> AppResult<i64> {
        self.ensure_running("check")?;
        self.elapsed_seconds()
    }

    /// Stops the timer, returning the final elapsed seconds and the original
    /// start anchor.
    pub fn stop(&mut self) -> AppResult<(i64, DateTime<Local>)> {
        self.ensure_running("stop")?;
        let elapsed = self.elapsed_seconds()?;
        self.state = TimerState::Stopped;
        Ok((elapsed, self.start_time))
    }

    fn ensure_running(&self, op: &str) -> AppResult<()> {
        if self.state == TimerState::Stopped {
            return Err(AppError::InvalidState(format!(
                "cannot {op} a stopped timer"
            )));
        }
        Ok(())
    }

    fn elapsed_seconds(&self) -> AppResult<i64> {
        let now = self.clock.now();
        if now < self.start_time {
            return Err(AppError::ClockRegression(format!(
                "current time {} is before session start {}",
                now.format("%Y-%m-%d %H:%M:%S"),
                self.start_time.format("%Y-%m-%d %H:%M:%S")
            )));
        }
        // num_seconds truncates, so fractional seconds round down
        Ok((now - self.start_time).num_seconds())
    }
}
