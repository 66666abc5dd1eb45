// src/data/records.rs

//! Raw CSV rows, one struct per input file.
//! Cells stay as text here; conversion into the domain models validates
//! timestamps, flags and event invariants.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Ticket, Transaction, Venue};
use crate::utils::time::parse_timestamp;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct VenueRecord {
    pub venue_id: String,
    #[serde(default)]
    pub venue_name: String,
    pub city: String,
    pub borough: String,
    pub neighborhood: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventRecord {
    pub event_id: String,
    #[serde(default)]
    pub event_name: String,
    pub venue_id: String,
    pub start_ts: String,
    pub end_ts: String,
    #[serde(default)]
    pub is_sponsored: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TicketRecord {
    pub order_id: String,
    pub event_id: String,
    pub sold_ts: String,
    #[serde(default)]
    pub checkin_ts: String,
    #[serde(default)]
    pub cancel_ts: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransactionRecord {
    #[serde(alias = "id", alias = "transaction_id", alias = "charge_id")]
    pub txn_id: String,
    pub event_id: String,
    pub created_ts: String,
    pub status: String,
    #[serde(default)]
    pub is_refund: String,
    pub net_amount: f64,
}

impl VenueRecord {
    pub fn into_model(self) -> AppResult<Venue> {
        Ok(Venue::new(
            self.venue_id,
            self.venue_name,
            self.city,
            self.borough,
            self.neighborhood,
            self.lat,
            self.lon,
        ))
    }
}

impl EventRecord {
    pub fn into_model(self) -> AppResult<Event> {
        let start_ts = parse_timestamp(&self.start_ts)?;
        let end_ts = parse_timestamp(&self.end_ts)?;

        if start_ts > end_ts {
            return Err(AppError::InvalidTimestamp(format!(
                "event {} ends ({}) before it starts ({})",
                self.event_id, self.end_ts, self.start_ts
            )));
        }

        Ok(Event {
            id: self.event_id,
            name: self.event_name,
            venue_id: self.venue_id,
            start_ts,
            end_ts,
            is_sponsored: parse_flag(&self.is_sponsored)?,
        })
    }
}

impl TicketRecord {
    pub fn into_model(self) -> AppResult<Ticket> {
        Ok(Ticket::from_cells(
            self.order_id,
            self.event_id,
            parse_timestamp(&self.sold_ts)?,
            &self.checkin_ts,
            &self.cancel_ts,
        ))
    }
}

impl TransactionRecord {
    pub fn into_model(self) -> AppResult<Transaction> {
        Ok(Transaction {
            id: self.txn_id,
            event_id: self.event_id,
            created_ts: parse_timestamp(&self.created_ts)?,
            status: self.status.trim().to_string(),
            is_refund: parse_flag(&self.is_refund)?,
            net_amount: self.net_amount,
        })
    }
}

/// Parse a boolean column. Empty cells are false.
pub fn parse_flag(raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "f" | "no" | "n" => Ok(false),
        "1" | "true" | "t" | "yes" | "y" => Ok(true),
        _ => Err(AppError::InvalidFlag(raw.to_string())),
    }
}
