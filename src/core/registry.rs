//! In-memory set of the stations, refreshed from the feed.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use crate::core::client::{Feed, HttpFeed};
use crate::prelude::*;

/// Minimal interval between two non-forced feed calls.
pub fn debounce_period() -> chrono::Duration {
    chrono::Duration::seconds(30)
}

/// Station criteria. Every non-empty list must contain the respective station field.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StationFilter {
    #[serde(default)]
    pub station_ids: Vec<String>,

    #[serde(default)]
    pub city_names: Vec<String>,

    #[serde(default)]
    pub station_names: Vec<String>,
}

impl StationFilter {
    pub fn matches(&self, station: &Station) -> bool {
        (self.station_ids.is_empty() || self.station_ids.contains(&station.id))
            && (self.city_names.is_empty() || self.city_names.contains(&station.city_name))
            && (self.station_names.is_empty() || self.station_names.contains(&station.station_name))
    }
}

/// Stations are replaced as a whole on every successful refresh.
#[derive(Clone)]
struct Snapshot {
    stations: Arc<Vec<Station>>,
    updated_at: DateTime<Local>,
}

pub struct Registry<F = HttpFeed> {
    feed: F,
    snapshot: RwLock<Snapshot>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_feed(HttpFeed::default())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Feed> Registry<F> {
    /// Empty registry which considers itself updated just now.
    pub fn with_feed(feed: F) -> Self {
        Self {
            feed,
            snapshot: RwLock::new(Snapshot {
                stations: Arc::new(Vec::new()),
                updated_at: Local::now(),
            }),
        }
    }

    #[cfg(test)]
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Current stations. The returned vector is not affected by later refreshes.
    pub fn stations(&self) -> Arc<Vec<Station>> {
        self.snapshot().stations
    }

    /// Time of the last successful refresh.
    pub fn updated_at(&self) -> DateTime<Local> {
        self.snapshot().updated_at
    }

    /// Refreshes the stations from the feed.
    ///
    /// Returns `Ok(false)` if the feed responded with an error, keeping the current stations.
    /// An unreachable feed is returned as `Err`.
    pub async fn refresh(&self, force: bool) -> Result<bool> {
        if !force && Local::now().signed_duration_since(self.updated_at()) < debounce_period() {
            debug!("Refresh requested, using the cached stations.");
            return Ok(true);
        }

        info!("Calling the SaveEcoBot feed…");
        let response = self.feed.fetch().await?;
        if !response.is_success() {
            error!("Failed feed response {}: {}", response.status, response.body);
            return Ok(false);
        }
        let records = match serde_json::from_str::<Vec<Value>>(&response.body) {
            Ok(records) => records,
            Err(error) => {
                error!("The feed is not a list of stations: {}", error);
                return Ok(false);
            }
        };

        let stations = parse_stations(&records);
        info!("{} of {} stations are valid.", stations.len(), records.len());
        self.replace(stations);
        Ok(true)
    }

    /// Stations which match the `filter`, in the registry order.
    pub fn filter(&self, filter: &StationFilter) -> Vec<Station> {
        self.stations()
            .iter()
            .filter(|station| filter.matches(station))
            .cloned()
            .collect()
    }

    /// Sorted unique city names.
    pub fn cities(&self) -> Vec<String> {
        self.stations()
            .iter()
            .map(|station| station.city_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(station_id, station_name)` of the stations in the `city`.
    pub fn city_stations(&self, city: &str) -> Vec<(String, String)> {
        self.stations()
            .iter()
            .filter(|station| station.city_name == city)
            .map(|station| (station.id.clone(), station.station_name.clone()))
            .collect()
    }

    /// Freshly derived record of the `kind` pollutant of the station.
    ///
    /// Duplicate station IDs are logged, the last station in the feed order wins.
    pub fn get_sensor(&self, station_id: &str, kind: PollutantKind) -> Option<SensorRecord> {
        let stations = self.stations();
        let mut candidates = stations.iter().filter(|station| station.id == station_id);
        let mut station = candidates.next()?;
        for duplicate in candidates {
            warn!("Station `{}` is listed more than once, using the last one.", station_id);
            station = duplicate;
        }
        station.sensors().into_iter().filter(|sensor| sensor.kind == kind).last()
    }

    fn snapshot(&self) -> Snapshot {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn replace(&self, stations: Vec<Station>) {
        let mut snapshot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *snapshot = Snapshot {
            stations: Arc::new(stations),
            updated_at: Local::now(),
        };
        debug!("Stations replaced.");
    }
}

/// Parses the valid records, logging and skipping the rest.
pub fn parse_stations(records: &[Value]) -> Vec<Station> {
    records
        .iter()
        .filter_map(|record| match Station::parse(record) {
            Ok(station) => Some(station),
            Err(error) => {
                error!("Validation error {}, skipping: {}", error, record);
                None
            }
        })
        .collect()
}
