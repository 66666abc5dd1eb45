//! Daily trend: revenue by transaction day, attendance by event day.

use crate::core::filter::TicketRow;
use crate::models::{DailyTrendRow, Transaction};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One row per calendar day, ordered by date.
///
/// Revenue is keyed on the transaction's creation day, ticket counts on the
/// start day of the ticket's event. A day present on one side only gets
/// zeros on the other. Transactions that are neither captured nor refunds
/// do not open a day.
pub fn calculate_daily_trend(
    transactions: &[&Transaction],
    tickets: &[TicketRow<'_>],
) -> Vec<DailyTrendRow> {
    let mut days: BTreeMap<NaiveDate, DailyTrendRow> = BTreeMap::new();

    for t in transactions.iter().filter(|t| t.counts_toward_revenue()) {
        let date = t.created_date();
        days.entry(date)
            .or_insert_with(|| DailyTrendRow::empty(date))
            .net_revenue += t.revenue_contribution();
    }

    for row in tickets {
        let date = row.event_date();
        let day = days.entry(date).or_insert_with(|| DailyTrendRow::empty(date));
        day.tickets_sold += 1;
        if row.ticket.checked_in {
            day.checkins += 1;
        }
        if row.ticket.cancelled {
            day.cancellations += 1;
        }
    }

    days.into_values().collect()
}

/// Top `n` days by net revenue, ties broken by earlier date.
pub fn peak_days(rows: &[DailyTrendRow], n: usize) -> Vec<DailyTrendRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.net_revenue
            .partial_cmp(&a.net_revenue)
            .unwrap_or(Ordering::Equal)
            .then(a.date.cmp(&b.date))
    });
    sorted.truncate(n);
    sorted
}
