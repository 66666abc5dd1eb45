//! Output records produced by the aggregator.
//! Flat, serializable rows: one struct per table shown or exported.

use chrono::NaiveDate;
use serde::Serialize;

/// Headline metrics for one filtered view.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HeadlineKpis {
    pub net_revenue: f64,
    pub tickets_sold: usize,
    pub checkins: usize,
    pub cancellations: usize,
    /// 0 when no tickets were sold.
    pub checkin_rate: f64,
    /// 0 when no tickets were sold.
    pub cancellation_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyTrendRow {
    pub date: NaiveDate,
    pub net_revenue: f64,
    pub tickets_sold: usize,
    pub checkins: usize,
    pub cancellations: usize,
}

impl DailyTrendRow {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            net_revenue: 0.0,
            tickets_sold: 0,
            checkins: 0,
            cancellations: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionRow {
    pub region_path: String,
    pub tickets_sold: usize,
    pub checkins: usize,
    pub cancellations: usize,
    pub net_revenue: f64,
    /// `None` when the region has no check-ins; never reported as 0.
    pub rev_per_attendee: Option<f64>,
}

/// Per-event figures, the building block of cohort and highlight views.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventStats {
    pub event_id: String,
    pub is_sponsored: bool,
    pub sold: usize,
    pub checkins: usize,
    pub cancellations: usize,
    pub net_revenue: f64,
    pub checkin_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CohortRow {
    pub label: String,
    pub is_sponsored: bool,
    pub events: usize,
    pub avg_event_revenue: f64,
    /// Mean of the per-event rates, every event weighted equally.
    pub avg_checkin_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopEventRow {
    pub event_id: String,
    pub event_name: String,
    pub venue_id: String,
    pub venue_name: String,
    pub city: String,
    pub borough: String,
    pub neighborhood: String,
    pub sold: usize,
    pub checkins: usize,
    pub checkin_rate: f64,
}
