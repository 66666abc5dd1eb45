//! Data loading: CSV tables in, immutable snapshot out.

pub mod loader;
mod records;
pub mod snapshot;

pub use loader::{DataFiles, load_snapshot};
pub use records::parse_flag;
pub use snapshot::{OrphanCounts, Snapshot};
