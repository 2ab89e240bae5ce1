//! Time utilities: the duration formatter and HH:MM parsing.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Renders a whole-second duration as a human-readable breakdown.
///
/// `3661` → `"1 h 1 min 1 sec"`, `65` → `"1 min 5 sec"`. A negative duration
/// is a contract violation and is rejected.
pub fn format_duration(seconds: i64) -> AppResult<String> {
    if seconds < 0 {
        return Err(AppError::InvalidDuration(seconds));
    }

    if seconds >= 3600 {
        let hours = seconds / 3600;
        let rem = seconds % 3600;
        Ok(format!("{} h {} min {} sec", hours, rem / 60, rem % 60))
    } else {
        Ok(format!("{} min {} sec", seconds / 60, seconds % 60))
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}
