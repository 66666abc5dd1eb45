//! Regional rollup keyed on the venue's "city > borough > neighborhood".

use crate::core::filter::TicketRow;
use crate::data::Snapshot;
use crate::models::{RegionRow, Transaction};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
struct RegionAcc {
    tickets_sold: usize,
    checkins: usize,
    cancellations: usize,
    net_revenue: f64,
}

/// Revenue per checked-in attendee; `None` without check-ins.
pub fn revenue_per_attendee(net_revenue: f64, checkins: usize) -> Option<f64> {
    if checkins > 0 {
        Some(net_revenue / checkins as f64)
    } else {
        None
    }
}

/// Group tickets and revenue by region path.
///
/// Regions come from the tickets, which carry their venue from the filtered
/// events. Revenue is attributed through the snapshot's event and venue
/// tables and only lands on regions that already have tickets, so city and
/// sponsorship filters hold for the revenue column too. Rows whose venue
/// cannot be resolved stay out of every group. Output is ordered by net
/// revenue (highest first), then by region path.
pub fn calculate_regional_rollup(
    snapshot: &Snapshot,
    tickets: &[TicketRow<'_>],
    transactions: &[&Transaction],
) -> Vec<RegionRow> {
    let mut regions: HashMap<&str, RegionAcc> = HashMap::new();
    let mut unresolved = 0usize;
    let mut outside = 0usize;

    for row in tickets {
        let Some(venue) = snapshot.venue(row.venue_id) else {
            unresolved += 1;
            continue;
        };
        let acc = regions.entry(venue.region_path.as_str()).or_default();
        acc.tickets_sold += 1;
        if row.ticket.checked_in {
            acc.checkins += 1;
        }
        if row.ticket.cancelled {
            acc.cancellations += 1;
        }
    }

    for t in transactions.iter().filter(|t| t.counts_toward_revenue()) {
        let Some(venue) = snapshot.venue_of_event(&t.event_id) else {
            unresolved += 1;
            continue;
        };
        match regions.get_mut(venue.region_path.as_str()) {
            Some(acc) => acc.net_revenue += t.revenue_contribution(),
            None => outside += 1,
        }
    }

    if unresolved > 0 {
        debug!(rows = unresolved, "rows without a resolvable venue left out of regions");
    }
    if outside > 0 {
        debug!(rows = outside, "revenue rows for regions without tickets in view skipped");
    }

    let mut rows: Vec<RegionRow> = regions
        .into_iter()
        .map(|(path, acc)| RegionRow {
            region_path: path.to_string(),
            tickets_sold: acc.tickets_sold,
            checkins: acc.checkins,
            cancellations: acc.cancellations,
            net_revenue: acc.net_revenue,
            rev_per_attendee: revenue_per_attendee(acc.net_revenue, acc.checkins),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.net_revenue
            .partial_cmp(&a.net_revenue)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.region_path.cmp(&b.region_path))
    });

    rows
}
