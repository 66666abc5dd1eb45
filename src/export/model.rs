// src/export/model.rs

use crate::models::{CohortRow, DailyTrendRow, HeadlineKpis, RegionRow, TopEventRow};
use serde::Serialize;

/// A flat record that can be written by every exporter.
///
/// `headers` and `to_row` must list the same columns in the same order as
/// the serde field names, so CSV/JSON and XLSX/PDF agree.
pub trait ReportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

fn money(v: f64) -> String {
    format!("{v:.2}")
}

fn ratio(v: f64) -> String {
    format!("{v:.4}")
}

impl ReportRow for HeadlineKpis {
    fn headers() -> Vec<&'static str> {
        vec![
            "net_revenue",
            "tickets_sold",
            "checkins",
            "cancellations",
            "checkin_rate",
            "cancellation_rate",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            money(self.net_revenue),
            self.tickets_sold.to_string(),
            self.checkins.to_string(),
            self.cancellations.to_string(),
            ratio(self.checkin_rate),
            ratio(self.cancellation_rate),
        ]
    }
}

impl ReportRow for DailyTrendRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "date",
            "net_revenue",
            "tickets_sold",
            "checkins",
            "cancellations",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            money(self.net_revenue),
            self.tickets_sold.to_string(),
            self.checkins.to_string(),
            self.cancellations.to_string(),
        ]
    }
}

impl ReportRow for RegionRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "region_path",
            "tickets_sold",
            "checkins",
            "cancellations",
            "net_revenue",
            "rev_per_attendee",
        ]
    }

    /// An undefined revenue per attendee is written as an empty cell.
    fn to_row(&self) -> Vec<String> {
        vec![
            self.region_path.clone(),
            self.tickets_sold.to_string(),
            self.checkins.to_string(),
            self.cancellations.to_string(),
            money(self.net_revenue),
            self.rev_per_attendee.map(money).unwrap_or_default(),
        ]
    }
}

impl ReportRow for CohortRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "label",
            "is_sponsored",
            "events",
            "avg_event_revenue",
            "avg_checkin_rate",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.is_sponsored.to_string(),
            self.events.to_string(),
            money(self.avg_event_revenue),
            ratio(self.avg_checkin_rate),
        ]
    }
}

impl ReportRow for TopEventRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "event_id",
            "event_name",
            "venue_id",
            "venue_name",
            "city",
            "borough",
            "neighborhood",
            "sold",
            "checkins",
            "checkin_rate",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.event_id.clone(),
            self.event_name.clone(),
            self.venue_id.clone(),
            self.venue_name.clone(),
            self.city.clone(),
            self.borough.clone(),
            self.neighborhood.clone(),
            self.sold.to_string(),
            self.checkins.to_string(),
            format!("{:.2}", self.checkin_rate),
        ]
    }
}

pub(crate) fn rows_to_table<T: ReportRow>(rows: &[T]) -> Vec<Vec<String>> {
    rows.iter().map(ReportRow::to_row).collect()
}
