//! Timestamp utilities: parsing the date-time columns of the CSV exports.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp cell.
///
/// Accepted shapes:
/// - `YYYY-MM-DD HH:MM[:SS[.fff]]` (space or `T` separator)
/// - RFC 3339 with offset, kept as its wall-clock time
/// - `YYYY-MM-DD` (midnight)
pub fn parse_timestamp(raw: &str) -> AppResult<NaiveDateTime> {
    let s = raw.trim();

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN));
    }

    Err(AppError::InvalidTimestamp(raw.to_string()))
}

/// Parse an optional timestamp cell: blank means "not set".
pub fn parse_optional_timestamp(raw: &str) -> AppResult<Option<NaiveDateTime>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_timestamp(raw).map(Some)
    }
}
