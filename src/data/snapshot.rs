// src/data/snapshot.rs

use crate::models::{Event, Ticket, Transaction, Venue};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// The four tables as loaded, plus id lookups.
///
/// A snapshot is never mutated after construction. Every filter and
/// aggregation borrows it, so one instance can back any number of views.
#[derive(Debug, Default)]
pub struct Snapshot {
    venues: Vec<Venue>,
    events: Vec<Event>,
    tickets: Vec<Ticket>,
    transactions: Vec<Transaction>,
    venue_idx: HashMap<String, usize>,
    event_idx: HashMap<String, usize>,
}

/// Rows whose reference cannot be resolved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrphanCounts {
    pub events_without_venue: usize,
    pub tickets_without_event: usize,
    pub transactions_without_event: usize,
}

impl OrphanCounts {
    pub fn total(&self) -> usize {
        self.events_without_venue + self.tickets_without_event + self.transactions_without_event
    }
}

impl Snapshot {
    /// Build a snapshot. When an id repeats, the first row wins the lookup.
    pub fn new(
        venues: Vec<Venue>,
        events: Vec<Event>,
        tickets: Vec<Ticket>,
        transactions: Vec<Transaction>,
    ) -> Self {
        let venue_idx = index_by(&venues, |v| v.id.as_str(), "venue");
        let event_idx = index_by(&events, |e| e.id.as_str(), "event");

        Self {
            venues,
            events,
            tickets,
            transactions,
            venue_idx,
            event_idx,
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venue_idx.get(id).map(|&i| &self.venues[i])
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.event_idx.get(id).map(|&i| &self.events[i])
    }

    /// Venue hosting the given event, if both ids resolve.
    pub fn venue_of_event(&self, event_id: &str) -> Option<&Venue> {
        self.event(event_id).and_then(|e| self.venue(&e.venue_id))
    }

    /// First and last calendar day across event starts and transaction
    /// creation times. `None` when both tables are empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let event_days = self.events.iter().map(Event::start_date);
        let txn_days = self.transactions.iter().map(|t| t.created_ts.date());

        event_days.chain(txn_days).fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }

    /// Distinct cities, sorted.
    pub fn cities(&self) -> Vec<&str> {
        self.venues
            .iter()
            .map(|v| v.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn orphans(&self) -> OrphanCounts {
        OrphanCounts {
            events_without_venue: self
                .events
                .iter()
                .filter(|e| self.venue(&e.venue_id).is_none())
                .count(),
            tickets_without_event: self
                .tickets
                .iter()
                .filter(|t| self.event(&t.event_id).is_none())
                .count(),
            transactions_without_event: self
                .transactions
                .iter()
                .filter(|t| self.event(&t.event_id).is_none())
                .count(),
        }
    }

    /// Refund rows carrying a positive amount. Net revenue assumes refunds
    /// are already negative, so these would inflate it.
    pub fn positive_refunds(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.is_refund && t.net_amount > 0.0)
            .count()
    }
}

fn index_by<T>(rows: &[T], key: impl Fn(&T) -> &str, what: &str) -> HashMap<String, usize> {
    let mut idx = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let k = key(row);
        if idx.contains_key(k) {
            warn!(kind = what, id = k, "duplicate id, keeping the first row");
            continue;
        }
        idx.insert(k.to_string(), i);
    }
    idx
}
