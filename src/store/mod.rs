//! Session log store: a flat CSV table of completed study sessions.
//!
//! The store is the sole owner of the on-disk schema. Collaborators read
//! sessions through `load()` and add rows through `append()`; nothing else
//! touches the file. Single-writer usage is assumed; concurrent appends from
//! multiple processes are out of scope.

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use std::fs;
use std::path::PathBuf;

/// Canonical column set of the session log. Column identity matters, column
/// order does not: rows are read by header name.
pub const COLUMNS: [&str; 4] = ["Date", "Subject", "Seconds", "Start Time"];

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All persisted sessions in insertion order. A missing log is the valid
    /// empty state, not an error. A malformed row fails the whole load with
    /// an error naming the row; rows are never silently dropped.
    pub fn load(&self) -> AppResult<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let cols = map_columns(&headers)?;

        let mut sessions = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            // header occupies line 1
            sessions.push(parse_row(&cols, &record, i + 2)?);
        }
        Ok(sessions)
    }

    /// Appends one session, creating the table (with its header) on first
    /// use. The whole table is rewritten to a sibling temp file which is then
    /// renamed over the log, so a failed write never corrupts existing rows.
    /// After `append` returns Ok, `load()` ends with the new row.
    pub fn append(&self, session: &Session) -> AppResult<()> {
        if session.subject.trim().is_empty() {
            return Err(AppError::InvalidSubject(
                "subject must not be empty".to_string(),
            ));
        }
        if session.seconds < 0 {
            return Err(AppError::InvalidDuration(session.seconds));
        }

        let mut sessions = self.load()?;
        sessions.push(session.clone());
        self.write_all(&sessions)
    }

    /// Creates an empty log with the canonical header if none exists, so a
    /// fresh table and a populated one are aggregation-equivalent.
    pub fn init_schema(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.write_all(&[])
    }

    /// Unique subject labels seen so far, in first-seen order.
    pub fn distinct_subjects(&self) -> AppResult<Vec<String>> {
        let sessions = self.load()?;
        let mut subjects: Vec<String> = Vec::new();
        for s in &sessions {
            if !subjects.iter().any(|known| known == &s.subject) {
                subjects.push(s.subject.clone());
            }
        }
        Ok(subjects)
    }

    fn write_all(&self, sessions: &[Session]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            writer.write_record(COLUMNS)?;
            for s in sessions {
                writer.write_record([
                    s.date_str(),
                    s.subject.clone(),
                    s.seconds.to_string(),
                    s.start_str(),
                ])?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

struct Columns {
    date: usize,
    subject: usize,
    seconds: usize,
    start: usize,
}

fn map_columns(headers: &csv::StringRecord) -> AppResult<Columns> {
    let find = |name: &str| {
        headers.iter().position(|h| h == name).ok_or_else(|| {
            AppError::Persistence(format!("missing column '{name}' in session log header"))
        })
    };

    Ok(Columns {
        date: find("Date")?,
        subject: find("Subject")?,
        seconds: find("Seconds")?,
        start: find("Start Time")?,
    })
}

fn parse_row(cols: &Columns, record: &csv::StringRecord, line: usize) -> AppResult<Session> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| AppError::Persistence(format!("row {line}: missing field '{name}'")))
    };

    let date_raw = field(cols.date, "Date")?;
    let date = parse_date(date_raw)
        .ok_or_else(|| AppError::Persistence(format!("row {line}: invalid date '{date_raw}'")))?;

    let subject = field(cols.subject, "Subject")?.trim().to_string();
    if subject.is_empty() {
        return Err(AppError::Persistence(format!("row {line}: empty subject")));
    }

    let seconds_raw = field(cols.seconds, "Seconds")?;
    let seconds: i64 = seconds_raw.trim().parse().map_err(|_| {
        AppError::Persistence(format!("row {line}: invalid seconds '{seconds_raw}'"))
    })?;
    if seconds < 0 {
        return Err(AppError::Persistence(format!(
            "row {line}: negative duration {seconds}"
        )));
    }

    let start_raw = field(cols.start, "Start Time")?;
    let start_time = parse_time(start_raw).ok_or_else(|| {
        AppError::Persistence(format!("row {line}: invalid start time '{start_raw}'"))
    })?;

    Ok(Session {
        date,
        subject,
        seconds,
        start_time,
    })
}
