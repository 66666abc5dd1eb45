//! Overview highlights: the best-selling events of a view.

use crate::data::Snapshot;
use crate::models::{EventStats, TopEventRow};

/// Events with at least one ticket, biggest sellers first, at most `n`.
///
/// Names and location come from the snapshot; an unresolved venue leaves
/// those columns blank. The check-in rate is rounded to two decimals.
pub fn top_events(snapshot: &Snapshot, stats: &[EventStats], n: usize) -> Vec<TopEventRow> {
    let mut sold: Vec<&EventStats> = stats.iter().filter(|s| s.sold > 0).collect();
    // stable: equal sellers keep their event order
    sold.sort_by(|a, b| b.sold.cmp(&a.sold));

    sold.into_iter()
        .take(n)
        .map(|s| {
            let event = snapshot.event(&s.event_id);
            let venue = snapshot.venue_of_event(&s.event_id);

            TopEventRow {
                event_id: s.event_id.clone(),
                event_name: event.map(|e| e.name.clone()).unwrap_or_default(),
                venue_id: event.map(|e| e.venue_id.clone()).unwrap_or_default(),
                venue_name: venue.map(|v| v.name.clone()).unwrap_or_default(),
                city: venue.map(|v| v.city.clone()).unwrap_or_default(),
                borough: venue.map(|v| v.borough.clone()).unwrap_or_default(),
                neighborhood: venue.map(|v| v.neighborhood.clone()).unwrap_or_default(),
                sold: s.sold,
                checkins: s.checkins,
                checkin_rate: round_to(s.checkin_rate, 2),
            }
        })
        .collect()
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
