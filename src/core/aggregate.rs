//! Aggregation engine: rolls the session log up by subject and by day.
//!
//! Every result is derived on demand from the full session table; no
//! aggregate state is cached between queries.

use crate::models::session::Session;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Daily totals over the trailing 7-day window, plus the mean of those seven
/// daily totals in hours (zero days included).
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub days: Vec<(NaiveDate, i64)>,
    pub mean_daily_hours: f64,
}

/// Total seconds per subject, in first-seen order. Subjects without sessions
/// simply do not appear; there is no zero-filling here.
pub fn totals_by_subject(sessions: &[Session]) -> Vec<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    for s in sessions {
        match totals.iter_mut().find(|(subject, _)| subject == &s.subject) {
            Some((_, sum)) => *sum += s.seconds,
            None => totals.push((s.subject.clone(), s.seconds)),
        }
    }
    totals
}

/// Total seconds per calendar day over the contiguous range from the first
/// recorded day through `today`, inclusive and ascending. Days without
/// sessions are emitted with 0, so a sparse and possibly out-of-order log
/// becomes a dense daily timeline. An empty log yields an empty sequence.
pub fn totals_by_day(sessions: &[Session], today: NaiveDate) -> Vec<(NaiveDate, i64)> {
    let Some(first) = sessions.iter().map(|s| s.date).min() else {
        return Vec::new();
    };

    let mut by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for s in sessions {
        *by_day.entry(s.date).or_insert(0) += s.seconds;
    }

    fill_range(&by_day, first, today)
}

/// Sum of all recorded seconds; 0 for an empty log.
pub fn overall_total(sessions: &[Session]) -> i64 {
    sessions.iter().map(|s| s.seconds).sum()
}

/// Daily totals restricted to `[today - 6 days, today]`, always exactly seven
/// entries regardless of how sparse the log is within that window.
pub fn weekly_totals(sessions: &[Session], today: NaiveDate) -> WeeklyReport {
    let start = today - chrono::Duration::days(6);

    let mut by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for s in sessions {
        if s.date >= start && s.date <= today {
            *by_day.entry(s.date).or_insert(0) += s.seconds;
        }
    }

    let days = fill_range(&by_day, start, today);
    let total: i64 = days.iter().map(|(_, secs)| secs).sum();
    let mean_daily_hours = total as f64 / days.len() as f64 / 3600.0;

    WeeklyReport {
        days,
        mean_daily_hours,
    }
}

/// Expands a sparse day → total mapping into a dense ascending sequence over
/// `start ..= end`, inserting 0 for missing days.
fn fill_range(
    by_day: &HashMap<NaiveDate, i64>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(NaiveDate, i64)> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push((d, by_day.get(&d).copied().unwrap_or(0)));
        let Some(next) = d.succ_opt() else { break };
        d = next;
    }
    out
}
