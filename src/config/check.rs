// src/config/check.rs

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 8] = [
    "data_dir",
    "venues_file",
    "events_file",
    "tickets_file",
    "transactions_file",
    "currency_symbol",
    "top_events",
    "peak_days",
];

/// List expected keys that are absent from the YAML file at `path`.
///
/// A missing file reports every key. Absent keys fall back to their
/// defaults at load time, so this is informational.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String(k.to_string())))
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    };

    Ok(missing)
}

/// Keys present in the file but unknown to this version.
pub fn unknown_keys(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let unknown = yaml
        .as_mapping()
        .map(|map| {
            map.keys()
                .filter_map(|k| k.as_str())
                .filter(|k| !EXPECTED_KEYS.contains(k))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(unknown)
}

/// Serialized defaults, shown next to the missing keys.
pub fn default_value(key: &str) -> Option<String> {
    let defaults = serde_yaml::to_value(Config::default()).ok()?;
    let value = defaults.get(key)?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_yaml::to_string(other).ok().map(|s| s.trim().to_string()),
    }
}
