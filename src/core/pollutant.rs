//! Pollutant readings as reported by the feed.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;

use crate::core::parse::{deserialize_optional_number, deserialize_optional_timestamp};
use crate::prelude::*;

lazy_static! {
    /// Maps the feed units onto the canonical display units.
    static ref UNITS: HashMap<&'static str, &'static str> = [
        ("mg/m3", "mg/m³"),
        ("ug/m3", "µg/m³"),
        ("Celcius", "°C"),
        ("%", "%"),
        ("hPa", "hPa"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Measured quantity. The feed names are matched exactly, anything else fails the station record.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PollutantKind {
    #[serde(rename = "PM2.5")]
    Pm25,

    #[serde(rename = "PM10")]
    Pm10,

    #[serde(rename = "Temperature")]
    Temperature,

    #[serde(rename = "Humidity")]
    Humidity,

    #[serde(rename = "Pressure")]
    Pressure,

    #[serde(rename = "Air Quality Index")]
    Aqi,
}

impl PollutantKind {
    /// Name used in sensor names and unique IDs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2_5",
            Self::Pm10 => "PM10",
            Self::Temperature => "TEMPERATURE",
            Self::Humidity => "HUMIDITY",
            Self::Pressure => "PRESSURE",
            Self::Aqi => "AQI",
        }
    }
}

impl Display for PollutantKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Pollutant {
    #[serde(rename = "pol")]
    pub kind: PollutantKind,

    /// Unit exactly as the feed spells it.
    pub unit: String,

    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub time: Option<DateTime<Local>>,

    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub value: Option<f64>,

    /// Averaging period, for example `2 minutes`.
    pub averaging: String,
}

impl Pollutant {
    /// Display unit, falls back to the raw one if it isn't known.
    pub fn display_unit(&self) -> &str {
        canonical_unit(&self.unit)
    }
}

pub fn canonical_unit(unit: &str) -> &str {
    UNITS.get(unit).copied().unwrap_or(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concentration_unit_is_translated() {
        assert_eq!(canonical_unit("mg/m3"), "mg/m³");
    }

    #[test]
    fn temperature_unit_is_translated() {
        assert_eq!(canonical_unit("Celcius"), "°C");
    }

    #[test]
    fn unknown_unit_passes_through() {
        assert_eq!(canonical_unit("unknown_unit"), "unknown_unit");
    }

    #[test]
    fn parse_ok() -> Result {
        let pollutant = serde_json::from_str::<Pollutant>(
            r#"{"pol":"PM2.5","unit":"ug/m3","time":"2020-11-09 16:30:39","value":"12.3","averaging":"2 minutes"}"#,
        )?;
        assert_eq!(pollutant.kind, PollutantKind::Pm25);
        assert_eq!(pollutant.value, Some(12.3));
        assert_eq!(pollutant.display_unit(), "µg/m³");
        assert!(pollutant.time.is_some());
        Ok(())
    }

    #[test]
    fn parse_null_time_and_value() -> Result {
        let pollutant = serde_json::from_str::<Pollutant>(
            r#"{"pol":"Air Quality Index","unit":"aqi","time":null,"value":null,"averaging":"1 hour"}"#,
        )?;
        assert_eq!(pollutant.kind, PollutantKind::Aqi);
        assert_eq!(pollutant.time, None);
        assert_eq!(pollutant.value, None);
        Ok(())
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<Pollutant>(
            r#"{"pol":"Ozone","unit":"ug/m3","time":null,"value":1,"averaging":"1 hour"}"#,
        )
        .is_err());
    }

    #[test]
    fn names() {
        assert_eq!(PollutantKind::Pm25.to_string(), "PM2_5");
        assert_eq!(PollutantKind::Aqi.name(), "AQI");
    }
}
