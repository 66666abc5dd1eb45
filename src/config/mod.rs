use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_venues_file")]
    pub venues_file: String,
    #[serde(default = "default_events_file")]
    pub events_file: String,
    #[serde(default = "default_tickets_file")]
    pub tickets_file: String,
    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_top_events")]
    pub top_events: usize,
    #[serde(default = "default_peak_days")]
    pub peak_days: usize,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_venues_file() -> String {
    "venues.csv".to_string()
}
fn default_events_file() -> String {
    "events.csv".to_string()
}
fn default_tickets_file() -> String {
    "tickets.csv".to_string()
}
fn default_transactions_file() -> String {
    "stripe_transactions.csv".to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_top_events() -> usize {
    20
}
fn default_peak_days() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            venues_file: default_venues_file(),
            events_file: default_events_file(),
            tickets_file: default_tickets_file(),
            transactions_file: default_transactions_file(),
            currency_symbol: default_currency_symbol(),
            top_events: default_top_events(),
            peak_days: default_peak_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("venueintel")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".venueintel")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("venueintel.conf")
    }

    /// Data directory with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path` and create the data dir.
    ///
    /// An existing file is kept unless `force` is set. `data_dir` replaces
    /// the default data directory.
    pub fn init_at(path: &Path, force: bool, data_dir: Option<&str>) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut config = Config::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir.to_string();
        }
        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        fs::create_dir_all(config.data_path())?;

        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        let files = [
            ("venues_file", &self.venues_file),
            ("events_file", &self.events_file),
            ("tickets_file", &self.tickets_file),
            ("transactions_file", &self.transactions_file),
        ];
        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("'{key}' must not be empty")));
            }
        }
        Ok(())
    }
}
