//! Sponsored vs. non-sponsored comparison, built from per-event figures.

use crate::core::calculator::headline::rate;
use crate::core::filter::TicketRow;
use crate::models::{CohortRow, Event, EventStats, Transaction};
use std::collections::HashMap;

pub const SPONSORED_LABEL: &str = "Sponsored";
pub const NON_SPONSORED_LABEL: &str = "Non-sponsored";

#[derive(Default)]
struct EventAcc {
    sold: usize,
    checkins: usize,
    cancellations: usize,
    net_revenue: f64,
}

/// Figures for every event in `events`, in the same order.
///
/// Events without tickets or revenue still get a row of zeros.
pub fn calculate_event_stats(
    events: &[&Event],
    tickets: &[TicketRow<'_>],
    transactions: &[&Transaction],
) -> Vec<EventStats> {
    let mut acc: HashMap<&str, EventAcc> = events
        .iter()
        .map(|e| (e.id.as_str(), EventAcc::default()))
        .collect();

    for row in tickets {
        if let Some(a) = acc.get_mut(row.event_id()) {
            a.sold += 1;
            if row.ticket.checked_in {
                a.checkins += 1;
            }
            if row.ticket.cancelled {
                a.cancellations += 1;
            }
        }
    }

    for t in transactions {
        if let Some(a) = acc.get_mut(t.event_id.as_str()) {
            a.net_revenue += t.revenue_contribution();
        }
    }

    events
        .iter()
        .map(|e| {
            let a = acc.get(e.id.as_str());
            let sold = a.map_or(0, |a| a.sold);
            let checkins = a.map_or(0, |a| a.checkins);
            EventStats {
                event_id: e.id.clone(),
                is_sponsored: e.is_sponsored,
                sold,
                checkins,
                cancellations: a.map_or(0, |a| a.cancellations),
                net_revenue: a.map_or(0.0, |a| a.net_revenue),
                checkin_rate: rate(checkins, sold),
            }
        })
        .collect()
}

/// Group per-event figures by sponsorship flag.
///
/// The check-in rate is the plain mean of per-event rates, so small and
/// large events weigh the same. Only cohorts with events are returned,
/// non-sponsored first.
pub fn calculate_cohorts(stats: &[EventStats]) -> Vec<CohortRow> {
    [false, true]
        .into_iter()
        .filter_map(|sponsored| {
            let members: Vec<&EventStats> =
                stats.iter().filter(|s| s.is_sponsored == sponsored).collect();
            if members.is_empty() {
                return None;
            }

            let n = members.len() as f64;
            let revenue: f64 = members.iter().map(|s| s.net_revenue).sum();
            let rates: f64 = members.iter().map(|s| s.checkin_rate).sum();

            Some(CohortRow {
                label: cohort_label(sponsored).to_string(),
                is_sponsored: sponsored,
                events: members.len(),
                avg_event_revenue: revenue / n,
                avg_checkin_rate: rates / n,
            })
        })
        .collect()
}

pub fn cohort_label(is_sponsored: bool) -> &'static str {
    if is_sponsored {
        SPONSORED_LABEL
    } else {
        NON_SPONSORED_LABEL
    }
}
