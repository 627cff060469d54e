//! Display-ready projection of one pollutant of one station.

use crate::prelude::*;

/// Readings older than this are considered deprecated.
pub fn deprecation_period() -> chrono::Duration {
    chrono::Duration::hours(12)
}

/// `updated_at` attribute format.
const UPDATED_AT_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct SensorRecord {
    /// `KIND (city, station)`.
    pub name: String,

    /// `<station slug>_<kind>`, lowercase.
    pub unique_id: String,

    pub station_id: String,

    pub kind: PollutantKind,

    pub state: Option<f64>,

    pub attributes: Attributes,

    pub deprecated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub city: String,
    pub address: String,
    pub local_name: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub updated_at: Option<String>,
    pub unit_of_measurement: String,
    pub averaging: String,
}

impl SensorRecord {
    /// Builds the record of the `pollutant` which belongs to the `station`.
    pub fn new(station: &Station, pollutant: &Pollutant, now: DateTime<Local>) -> Self {
        Self {
            name: format!("{} ({}, {})", pollutant.kind, station.city_name, station.station_name),
            unique_id: format!("{}_{}", station.slug(), pollutant.kind.name().to_lowercase()),
            station_id: station.id.clone(),
            kind: pollutant.kind,
            state: pollutant.value,
            attributes: Attributes {
                city: station.city_name.clone(),
                address: station.station_name.clone(),
                local_name: station.local_name.clone(),
                timezone: station.timezone.clone(),
                latitude: station.latitude,
                longitude: station.longitude,
                updated_at: pollutant.time.map(|time| time.format(UPDATED_AT_FORMAT).to_string()),
                unit_of_measurement: pollutant.display_unit().to_string(),
                averaging: pollutant.averaging.clone(),
            },
            deprecated: is_deprecated(pollutant.time, now),
        }
    }

    pub fn unit_of_measurement(&self) -> &str {
        &self.attributes.unit_of_measurement
    }
}

/// A reading without a timestamp cannot prove it's fresh, so it's deprecated too.
pub fn is_deprecated(time: Option<DateTime<Local>>, now: DateTime<Local>) -> bool {
    match time {
        Some(time) => now.signed_duration_since(time) > deprecation_period(),
        None => true,
    }
}
