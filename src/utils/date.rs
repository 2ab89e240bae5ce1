//! Calendar date utilities: today, parsing, period filters.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date interval, used by `list --period` and `export --range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn contains(&self, d: NaiveDate) -> bool {
        d >= self.start && d <= self.end
    }
}

/// Parses `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or a `start:end` pair of those
/// into the interval it covers.
pub fn parse_period(p: &str) -> AppResult<DateInterval> {
    // start:end
    if let Some((a, b)) = p.split_once(':') {
        let s = parse_period(a)?;
        let e = parse_period(b)?;
        return Ok(DateInterval {
            start: s.start,
            end: e.end,
        });
    }

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(DateInterval { start: d, end: d });
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Ok(DateInterval {
            start: first,
            end: last_day_of_month(first),
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok(DateInterval { start, end });
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let mut d = first;
    while let Some(next) = d.succ_opt() {
        if next.month() != first.month() {
            break;
        }
        d = next;
    }
    d
}
