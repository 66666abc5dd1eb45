// src/data/loader.rs

use crate::config::Config;
use crate::data::records::{EventRecord, TicketRecord, TransactionRecord, VenueRecord};
use crate::data::snapshot::Snapshot;
use crate::errors::{AppError, AppResult};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Locations of the four input tables.
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub venues: PathBuf,
    pub events: PathBuf,
    pub tickets: PathBuf,
    pub transactions: PathBuf,
}

impl DataFiles {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            venues: dir.join("venues.csv"),
            events: dir.join("events.csv"),
            tickets: dir.join("tickets.csv"),
            transactions: dir.join("stripe_transactions.csv"),
        }
    }

    /// File names and directory taken from the configuration.
    pub fn from_config(cfg: &Config) -> Self {
        let dir = cfg.data_path();
        Self {
            venues: dir.join(&cfg.venues_file),
            events: dir.join(&cfg.events_file),
            tickets: dir.join(&cfg.tickets_file),
            transactions: dir.join(&cfg.transactions_file),
        }
    }

    fn all(&self) -> [&Path; 4] {
        [
            self.venues.as_path(),
            self.events.as_path(),
            self.tickets.as_path(),
            self.transactions.as_path(),
        ]
    }
}

/// Read all four tables into a snapshot.
///
/// Every file is checked before any is parsed, so a missing table fails
/// fast. Any malformed row aborts the whole load.
pub fn load_snapshot(files: &DataFiles) -> AppResult<Snapshot> {
    for path in files.all() {
        if !path.is_file() {
            return Err(AppError::MissingDataFile(path.display().to_string()));
        }
    }

    let venues = read_table(&files.venues, VenueRecord::into_model)?;
    let events = read_table(&files.events, EventRecord::into_model)?;
    let tickets = read_table(&files.tickets, TicketRecord::into_model)?;
    let unparsed = tickets.iter().filter(|t| t.has_unparsed_marks()).count();
    if unparsed > 0 {
        warn!(
            count = unparsed,
            "tickets with a check-in or cancel cell that is not a timestamp; counted as set"
        );
    }
    let transactions = read_table(&files.transactions, TransactionRecord::into_model)?;

    debug!(
        venues = venues.len(),
        events = events.len(),
        tickets = tickets.len(),
        transactions = transactions.len(),
        "tables loaded"
    );

    let snapshot = Snapshot::new(venues, events, tickets, transactions);

    let orphans = snapshot.orphans();
    if orphans.total() > 0 {
        warn!(
            events_without_venue = orphans.events_without_venue,
            tickets_without_event = orphans.tickets_without_event,
            transactions_without_event = orphans.transactions_without_event,
            "rows with unresolved references are left out of joined views"
        );
    }

    let positive = snapshot.positive_refunds();
    if positive > 0 {
        warn!(
            count = positive,
            "refund rows with a positive net_amount; net revenue adds them as-is"
        );
    }

    Ok(snapshot)
}

fn read_table<R, T>(path: &Path, convert: fn(R) -> AppResult<T>) -> AppResult<Vec<T>>
where
    R: DeserializeOwned,
{
    let file = File::open(path)?;
    read_records(file, &path.display().to_string(), convert)
}

/// Deserialize CSV rows from any reader and convert them into models.
/// Conversion failures are reported with the file label and line number.
fn read_records<S, R, T>(
    source: S,
    label: &str,
    convert: fn(R) -> AppResult<T>,
) -> AppResult<Vec<T>>
where
    S: Read,
    R: DeserializeOwned,
{
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(source);

    let mut out = Vec::new();
    for (i, record) in rdr.deserialize::<R>().enumerate() {
        let record = record?;
        // header is line 1
        let line = i + 2;
        let model = convert(record).map_err(|e| AppError::InvalidData {
            file: label.to_string(),
            reason: format!("line {line}: {e}"),
        })?;
        out.push(model);
    }

    Ok(out)
}
