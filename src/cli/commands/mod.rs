use crate::config::Config;
use crate::data::{DataFiles, Snapshot, load_snapshot};
use crate::errors::AppResult;

pub mod config;
pub mod export;
pub mod info;
pub mod init;
pub mod overview;
pub mod regions;
pub mod sponsors;
pub mod summary;
pub mod trends;

/// Load the four tables named by the configuration.
pub(crate) fn open_snapshot(cfg: &Config) -> AppResult<Snapshot> {
    load_snapshot(&DataFiles::from_config(cfg))
}
