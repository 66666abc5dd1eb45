// src/core/window.rs

//! Date windows: the half-open `[start, end)` interval every filter uses,
//! plus parsing of `--range` expressions and `--period` presets.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::fmt;

/// Half-open interval of date-times. `start == end` is the empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// `[first 00:00, last + 1 day 00:00)`: both selected days included.
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> AppResult<Self> {
        if first > last {
            return Err(AppError::InvalidRange(format!(
                "start date {first} is after end date {last}"
            )));
        }
        Self::new(midnight(first), midnight(last) + Duration::days(1))
    }

    pub fn empty_at(day: NaiveDate) -> Self {
        let t = midnight(day);
        Self { start: t, end: t }
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        *ts >= self.start && *ts < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Last calendar day touched by the window, for display.
    pub fn last_day(&self) -> NaiveDate {
        if self.is_empty() {
            return self.start.date();
        }
        (self.end - Duration::nanoseconds(1)).date()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty window at {})", self.start.date())
        } else {
            write!(f, "{} to {}", self.start.date(), self.last_day())
        }
    }
}

fn midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

/// How the date window is chosen before it is resolved against the data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WindowSpec {
    /// From the first to the last day found in events and transactions.
    #[default]
    Full,
    /// Explicit inclusive day range.
    Dates(NaiveDate, NaiveDate),
    /// The last N days up to the dataset's last day.
    LastDays(u32),
    /// From 1 January of the current year to the dataset's last day.
    YearToDate,
}

impl WindowSpec {
    /// Parse a `--range` expression.
    ///
    /// Supported:
    /// - `all`
    /// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    pub fn parse_range(expr: &str) -> AppResult<Self> {
        let r = expr.trim();
        if r.eq_ignore_ascii_case("all") {
            return Ok(Self::Full);
        }

        let (first, last) = match r.split_once(':') {
            Some((start_raw, end_raw)) => {
                let start = start_raw.trim();
                let end = end_raw.trim();

                if start.len() != end.len() {
                    return Err(AppError::InvalidRange(format!(
                        "start and end must have same format: {r}"
                    )));
                }

                let (first, _) = token_bounds(start)?;
                let (_, last) = token_bounds(end)?;
                (first, last)
            }
            None => token_bounds(r)?,
        };

        if first > last {
            return Err(AppError::InvalidRange(format!("{r}: start is after end")));
        }

        Ok(Self::Dates(first, last))
    }

    /// Parse a `--period` preset: `all`, `ytd` or `<N>d`.
    pub fn parse_period(expr: &str) -> AppResult<Self> {
        let p = expr.trim().to_ascii_lowercase();
        match p.as_str() {
            "all" => return Ok(Self::Full),
            "ytd" => return Ok(Self::YearToDate),
            _ => {}
        }

        let re = Regex::new(r"^(\d{1,5})d$").map_err(|e| AppError::Other(e.to_string()))?;
        let days = re
            .captures(&p)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| {
                AppError::InvalidPeriod(format!("{expr} (expected all, ytd or <N>d)"))
            })?;

        Ok(Self::LastDays(days))
    }

    /// Turn the choice into a concrete window.
    ///
    /// `span` is the dataset's first/last day; `today` anchors `ytd`.
    /// Presets over an empty dataset resolve to an empty window.
    pub fn resolve(
        &self,
        span: Option<(NaiveDate, NaiveDate)>,
        today: NaiveDate,
    ) -> AppResult<DateWindow> {
        match (self, span) {
            (Self::Dates(first, last), _) => DateWindow::from_dates(*first, *last),
            (_, None) => Ok(DateWindow::empty_at(today)),
            (Self::Full, Some((lo, hi))) => DateWindow::from_dates(lo, hi),
            (Self::LastDays(n), Some((_, hi))) => {
                let start = midnight(hi) - Duration::days(i64::from(*n));
                DateWindow::new(start, midnight(hi) + Duration::days(1))
            }
            (Self::YearToDate, Some((_, hi))) => {
                let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1)
                    .ok_or_else(|| AppError::InvalidDate(format!("{}-01-01", today.year())))?;
                let end = midnight(hi) + Duration::days(1);
                let start = midnight(jan1);
                if start >= end {
                    Ok(DateWindow::empty_at(hi))
                } else {
                    DateWindow::new(start, end)
                }
            }
        }
    }
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn token_bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(token.to_string());

    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = month_last_day(d1.year(), d1.month()).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(d1.year(), d1.month(), last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported --range format: {token}"
        ))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
