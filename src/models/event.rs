use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub venue_id: String,
    pub start_ts: NaiveDateTime,
    pub end_ts: NaiveDateTime,
    pub is_sponsored: bool,
}

impl Event {
    /// Calendar day the event starts on; events are filtered and
    /// trended by it.
    pub fn start_date(&self) -> NaiveDate {
        self.start_ts.date()
    }
}
