use chrono::NaiveDate;
use venue_intel::core::{DateWindow, WindowSpec};
use venue_intel::errors::AppError;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn span() -> Option<(NaiveDate, NaiveDate)> {
    Some((day("2024-11-15"), day("2025-03-10")))
}

#[test]
fn range_single_tokens() {
    assert_eq!(
        WindowSpec::parse_range("2025").unwrap(),
        WindowSpec::Dates(day("2025-01-01"), day("2025-12-31"))
    );
    assert_eq!(
        WindowSpec::parse_range("2024-02").unwrap(),
        WindowSpec::Dates(day("2024-02-01"), day("2024-02-29"))
    );
    assert_eq!(
        WindowSpec::parse_range("2025-03-04").unwrap(),
        WindowSpec::Dates(day("2025-03-04"), day("2025-03-04"))
    );
    assert_eq!(WindowSpec::parse_range("all").unwrap(), WindowSpec::Full);
}

#[test]
fn range_intervals() {
    assert_eq!(
        WindowSpec::parse_range("2025-01:2025-03").unwrap(),
        WindowSpec::Dates(day("2025-01-01"), day("2025-03-31"))
    );
    assert_eq!(
        WindowSpec::parse_range("2025-03-01:2025-03-05").unwrap(),
        WindowSpec::Dates(day("2025-03-01"), day("2025-03-05"))
    );
}

#[test]
fn range_rejects_bad_input() {
    assert!(matches!(
        WindowSpec::parse_range("2025:2025-03"),
        Err(AppError::InvalidRange(_))
    ));
    assert!(matches!(
        WindowSpec::parse_range("2025-03-10:2025-03-01"),
        Err(AppError::InvalidRange(_))
    ));
    assert!(matches!(
        WindowSpec::parse_range("2025-13"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(WindowSpec::parse_range("yesterday").is_err());
}

#[test]
fn period_presets() {
    assert_eq!(WindowSpec::parse_period("30d").unwrap(), WindowSpec::LastDays(30));
    assert_eq!(WindowSpec::parse_period("YTD").unwrap(), WindowSpec::YearToDate);
    assert_eq!(WindowSpec::parse_period("all").unwrap(), WindowSpec::Full);
    assert!(matches!(
        WindowSpec::parse_period("3w"),
        Err(AppError::InvalidPeriod(_))
    ));
}

#[test]
fn window_is_half_open() {
    let w = DateWindow::from_dates(day("2025-03-01"), day("2025-03-01")).unwrap();
    let inside = day("2025-03-01").and_hms_opt(23, 59, 59).unwrap();
    let next = day("2025-03-02").and_hms_opt(0, 0, 0).unwrap();
    assert!(w.contains(&inside));
    assert!(!w.contains(&next));
    assert_eq!(w.last_day(), day("2025-03-01"));
    assert_eq!(w.to_string(), "2025-03-01 to 2025-03-01");

    assert!(DateWindow::from_dates(day("2025-03-02"), day("2025-03-01")).is_err());
}

#[test]
fn full_resolves_to_data_span() {
    let w = WindowSpec::Full.resolve(span(), day("2025-06-01")).unwrap();
    assert_eq!(w, DateWindow::from_dates(day("2024-11-15"), day("2025-03-10")).unwrap());
}

#[test]
fn last_days_anchor_on_max_date() {
    let w = WindowSpec::LastDays(30)
        .resolve(span(), day("2025-06-01"))
        .unwrap();
    assert!(w.contains(&day("2025-02-08").and_hms_opt(0, 0, 0).unwrap()));
    assert!(!w.contains(&day("2025-02-07").and_hms_opt(23, 0, 0).unwrap()));
    assert_eq!(w.last_day(), day("2025-03-10"));
}

#[test]
fn year_to_date_uses_current_year() {
    let w = WindowSpec::YearToDate
        .resolve(span(), day("2025-06-01"))
        .unwrap();
    assert!(!w.contains(&day("2024-12-31").and_hms_opt(12, 0, 0).unwrap()));
    assert!(w.contains(&day("2025-01-01").and_hms_opt(0, 0, 0).unwrap()));

    // data entirely before this year
    let stale = WindowSpec::YearToDate
        .resolve(span(), day("2026-02-01"))
        .unwrap();
    assert!(stale.is_empty());
}

#[test]
fn presets_on_empty_dataset_are_empty() {
    let today = day("2025-06-01");
    for spec in [WindowSpec::Full, WindowSpec::LastDays(7), WindowSpec::YearToDate] {
        assert!(spec.resolve(None, today).unwrap().is_empty());
    }
    // explicit dates do not depend on the data
    let explicit = WindowSpec::Dates(day("2025-01-01"), day("2025-01-31"))
        .resolve(None, today)
        .unwrap();
    assert!(!explicit.is_empty());
}
