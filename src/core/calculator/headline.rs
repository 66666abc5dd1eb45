//! Headline KPIs: revenue, tickets, check-ins and cancellations of a view.

use crate::core::filter::TicketRow;
use crate::models::{HeadlineKpis, Transaction};

/// `part / whole`, or 0 when `whole` is 0.
pub fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Captured amounts plus refund amounts, refunds taken as signed.
pub fn net_revenue<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .map(Transaction::revenue_contribution)
        .sum()
}

pub fn calculate_headline(transactions: &[&Transaction], tickets: &[TicketRow<'_>]) -> HeadlineKpis {
    let tickets_sold = tickets.len();
    let checkins = tickets.iter().filter(|t| t.ticket.checked_in).count();
    let cancellations = tickets.iter().filter(|t| t.ticket.cancelled).count();

    HeadlineKpis {
        net_revenue: net_revenue(transactions.iter().copied()),
        tickets_sold,
        checkins,
        cancellations,
        checkin_rate: rate(checkins, tickets_sold),
        cancellation_rate: rate(cancellations, tickets_sold),
    }
}
