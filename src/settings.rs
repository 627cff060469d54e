//! # Settings
//!
//! The settings are read from one or more TOML files. Top-level keys of a latter file
//! override the ones of the former files.
//!
//! ## Example
//!
//! ```toml
//! interval_millis = 60000
//! timeout_millis = 10000
//! city_names = ["Kyiv"]
//! station_ids = ["SAVEDNIPRO_17", "SAVEDNIPRO_19"]
//! ```

use std::fs;
use std::path::Path;

use crate::prelude::*;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Sensor update interval.
    #[serde(default = "default_interval_millis")]
    pub interval_millis: u64,

    /// Feed call timeout, the body download included.
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,

    /// Which stations to expose as sensors. Everything if empty.
    #[serde(flatten)]
    pub filter: StationFilter,
}

/// Defaults to one minute.
const fn default_interval_millis() -> u64 {
    60000
}

const fn default_timeout_millis() -> u64 {
    10000
}

impl Settings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_millis)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

/// Reads and merges the settings files.
pub fn read<P: AsRef<Path>>(paths: &[P]) -> Result<Settings> {
    let mut merged = toml::value::Table::new();
    for path in paths {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
        let table = parse_table(&contents).with_context(|| format!("failed to parse `{}`", path.display()))?;
        for (key, value) in table {
            merged.insert(key, value);
        }
    }
    Ok(toml::Value::Table(merged).try_into()?)
}

fn parse_table(contents: &str) -> Result<toml::value::Table> {
    Ok(toml::from_str(contents)?)
}
