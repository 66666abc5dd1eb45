use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Status value of a payment whose funds were collected.
pub const STATUS_CAPTURED: &str = "captured";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub event_id: String,
    pub created_ts: NaiveDateTime,
    pub status: String,
    pub is_refund: bool,
    pub net_amount: f64,
}

impl Transaction {
    pub fn is_captured(&self) -> bool {
        self.status == STATUS_CAPTURED
    }

    /// Whether this row takes part in net revenue at all.
    pub fn counts_toward_revenue(&self) -> bool {
        self.is_captured() || self.is_refund
    }

    /// Share of this row in net revenue: captured amount plus refund amount.
    ///
    /// Refunds are expected to be negative already and are never re-signed.
    /// A row that is both captured and a refund counts in both sums.
    pub fn revenue_contribution(&self) -> f64 {
        let mut total = 0.0;
        if self.is_captured() {
            total += self.net_amount;
        }
        if self.is_refund {
            total += self.net_amount;
        }
        total
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_ts.date()
    }
}
