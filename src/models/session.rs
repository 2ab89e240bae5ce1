use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One completed, timed study interval for a subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub date: NaiveDate,       // ⇔ log "Date" (TEXT "YYYY-MM-DD")
    pub subject: String,       // ⇔ log "Subject" (free text, non-empty)
    pub seconds: i64,          // ⇔ log "Seconds" (INT >= 0)
    pub start_time: NaiveTime, // ⇔ log "Start Time" (TEXT "HH:MM")
}

impl Session {
    /// Validating constructor.
    /// Rejects an empty subject and a negative duration, so a session that
    /// would violate the log invariants can never be built through here.
    pub fn new(
        date: NaiveDate,
        subject: &str,
        seconds: i64,
        start_time: NaiveTime,
    ) -> AppResult<Self> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::InvalidSubject(
                "subject must not be empty".to_string(),
            ));
        }
        if seconds < 0 {
            return Err(AppError::InvalidDuration(seconds));
        }

        Ok(Self {
            date,
            subject: subject.to_string(),
            seconds,
            start_time,
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
}
