use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "YYYY-MM-DD → YYYY-MM-DD", or "--" when there is no data.
pub fn format_span(span: Option<(NaiveDate, NaiveDate)>) -> String {
    match span {
        Some((first, last)) => format!("{} → {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d")),
        None => "--".to_string(),
    }
}

/// Number of calendar days covered by the span, both ends included.
pub fn span_days(span: Option<(NaiveDate, NaiveDate)>) -> i64 {
    span.map(|(first, last)| (last - first).num_days() + 1)
        .unwrap_or(0)
}
