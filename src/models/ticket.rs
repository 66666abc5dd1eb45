use crate::utils::time::parse_optional_timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A sold ticket.
///
/// `checked_in` and `cancelled` are computed once by the loader from the
/// raw cells ("non-empty" means set), so every view shares one predicate.
/// The timestamps are `None` for blank or unreadable cells.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ticket {
    pub order_id: String,
    pub event_id: String,
    pub sold_ts: NaiveDateTime,
    pub checkin_ts: Option<NaiveDateTime>,
    pub cancel_ts: Option<NaiveDateTime>,
    pub checked_in: bool,
    pub cancelled: bool,
}

impl Ticket {
    /// Build a ticket from the raw check-in and cancel cells.
    ///
    /// A non-blank cell sets the predicate whatever it holds; the timestamp
    /// is kept only when the cell parses as one.
    pub fn from_cells(
        order_id: impl Into<String>,
        event_id: impl Into<String>,
        sold_ts: NaiveDateTime,
        checkin_cell: &str,
        cancel_cell: &str,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            event_id: event_id.into(),
            sold_ts,
            checkin_ts: parse_optional_timestamp(checkin_cell).ok().flatten(),
            cancel_ts: parse_optional_timestamp(cancel_cell).ok().flatten(),
            checked_in: !checkin_cell.trim().is_empty(),
            cancelled: !cancel_cell.trim().is_empty(),
        }
    }

    /// Set as checked in or cancelled, but without a readable timestamp.
    pub fn has_unparsed_marks(&self) -> bool {
        (self.checked_in && self.checkin_ts.is_none()) || (self.cancelled && self.cancel_ts.is_none())
    }
}
