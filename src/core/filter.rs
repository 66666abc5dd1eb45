// src/core/filter.rs

//! Filter engine: narrows the snapshot to a date window, a city and a
//! sponsorship flag. Every view is built from the result.

use crate::core::window::{DateWindow, WindowSpec};
use crate::data::Snapshot;
use crate::errors::AppResult;
use crate::models::{Event, Ticket, Transaction};
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use std::collections::HashMap;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SponsorshipFilter {
    #[default]
    All,
    Sponsored,
    NonSponsored,
}

impl SponsorshipFilter {
    pub fn admits(&self, is_sponsored: bool) -> bool {
        match self {
            SponsorshipFilter::All => true,
            SponsorshipFilter::Sponsored => is_sponsored,
            SponsorshipFilter::NonSponsored => !is_sponsored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorshipFilter::All => "all",
            SponsorshipFilter::Sponsored => "sponsored",
            SponsorshipFilter::NonSponsored => "non-sponsored",
        }
    }
}

/// A ticket joined to its (filtered) event.
#[derive(Debug, Clone, Copy)]
pub struct TicketRow<'a> {
    pub ticket: &'a Ticket,
    pub venue_id: &'a str,
    pub start_ts: NaiveDateTime,
}

impl TicketRow<'_> {
    pub fn event_id(&self) -> &str {
        &self.ticket.event_id
    }

    pub fn event_date(&self) -> NaiveDate {
        self.start_ts.date()
    }
}

/// The three filtered tables, borrowing from one snapshot.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub window: DateWindow,
    pub events: Vec<&'a Event>,
    pub tickets: Vec<TicketRow<'a>>,
    pub transactions: Vec<&'a Transaction>,
    snapshot: &'a Snapshot,
}

impl<'a> FilteredView<'a> {
    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.tickets.is_empty() && self.transactions.is_empty()
    }
}

/// Selection made by the user: window, city and sponsorship.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub window: WindowSpec,
    pub city: Option<String>,
    pub sponsorship: SponsorshipFilter,
}

impl FilterSpec {
    pub fn new(window: WindowSpec) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// `None`, blank or `All` (any case) clears the city filter.
    pub fn with_city(mut self, city: Option<&str>) -> Self {
        self.city = city
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        self
    }

    pub fn with_sponsorship(mut self, sponsorship: SponsorshipFilter) -> Self {
        self.sponsorship = sponsorship;
        self
    }

    /// Apply the filters, anchoring `ytd` on the local date.
    pub fn apply<'a>(&self, snapshot: &'a Snapshot) -> AppResult<FilteredView<'a>> {
        self.apply_at(snapshot, crate::utils::date::today())
    }

    pub fn apply_at<'a>(
        &self,
        snapshot: &'a Snapshot,
        today: NaiveDate,
    ) -> AppResult<FilteredView<'a>> {
        let window = self.window.resolve(snapshot.date_span(), today)?;
        Ok(filter_window(
            snapshot,
            window,
            self.city.as_deref(),
            self.sponsorship,
        ))
    }
}

/// Core of the filter engine.
///
/// - events: start_ts in the window, then city, then sponsorship
/// - transactions: created_ts in the window, independent of the events
/// - tickets: inner join on the kept events
pub fn filter_window<'a>(
    snapshot: &'a Snapshot,
    window: DateWindow,
    city: Option<&str>,
    sponsorship: SponsorshipFilter,
) -> FilteredView<'a> {
    let events: Vec<&Event> = snapshot
        .events()
        .iter()
        .filter(|e| window.contains(&e.start_ts))
        .filter(|e| match city {
            Some(c) => snapshot.venue(&e.venue_id).is_some_and(|v| v.city == c),
            None => true,
        })
        .filter(|e| sponsorship.admits(e.is_sponsored))
        .collect();

    let transactions: Vec<&Transaction> = snapshot
        .transactions()
        .iter()
        .filter(|t| window.contains(&t.created_ts))
        .collect();

    let mut by_id: HashMap<&str, &Event> = HashMap::with_capacity(events.len());
    for &e in &events {
        by_id.entry(e.id.as_str()).or_insert(e);
    }

    let tickets: Vec<TicketRow> = snapshot
        .tickets()
        .iter()
        .filter_map(|t| {
            by_id.get(t.event_id.as_str()).map(|&e| TicketRow {
                ticket: t,
                venue_id: e.venue_id.as_str(),
                start_ts: e.start_ts,
            })
        })
        .collect();

    debug!(
        window = %window,
        city = city.unwrap_or("All"),
        sponsorship = sponsorship.as_str(),
        events = events.len(),
        tickets = tickets.len(),
        transactions = transactions.len(),
        "filters applied"
    );

    FilteredView {
        window,
        events,
        tickets,
        transactions,
        snapshot,
    }
}
