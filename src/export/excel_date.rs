// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Try to read a cell as a date or date-time and return the Excel number
/// format together with the serial value.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm", serial));
        }
    }

    // chrono accepts non-padded fields; require the exact YYYY-MM-DD shape
    if s.len() == 10
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
    {
        return excel_serial(&d.and_time(NaiveTime::MIN)).map(|serial| ("yyyy-mm-dd", serial));
    }

    None
}

/// Days since the 1899-12-30 epoch, fractional part for the time of day.
fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let duration = *dt - epoch;
    Some(duration.num_seconds() as f64 / 86_400.0)
}
