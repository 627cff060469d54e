//! Monitoring station and its parsing from a raw feed record.

use serde_json::Value;

use crate::core::parse::{deserialize_id, deserialize_number};
use crate::prelude::*;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    pub city_name: String,

    /// Usually the street address.
    pub station_name: String,

    pub local_name: String,

    pub timezone: String,

    #[serde(deserialize_with = "deserialize_number")]
    pub latitude: f64,

    #[serde(deserialize_with = "deserialize_number")]
    pub longitude: f64,

    pub pollutants: Vec<Pollutant>,
}

impl Station {
    /// Validates a single raw feed record.
    pub fn parse(record: &Value) -> Result<Self> {
        Ok(Self::deserialize(record)?)
    }

    /// Stable `id_cityname` slug, lowercase.
    pub fn slug(&self) -> String {
        format!("{}_{}", self.id, self.city_name).to_lowercase()
    }

    /// Sensor records in the pollutant order, deprecation is checked against now.
    pub fn sensors(&self) -> Vec<SensorRecord> {
        self.sensors_at(Local::now())
    }

    pub fn sensors_at(&self, now: DateTime<Local>) -> Vec<SensorRecord> {
        self.pollutants
            .iter()
            .map(|pollutant| SensorRecord::new(self, pollutant, now))
            .collect()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use serde_json::json;

    pub fn record(id: &str, city_name: &str, station_name: &str) -> Value {
        json!({
            "id": id,
            "cityName": city_name,
            "stationName": station_name,
            "localName": "Kyivska oblast",
            "timezone": "Europe/Kiev",
            "latitude": "50.45",
            "longitude": 30.52,
            "pollutants": [
                {"pol": "PM2.5", "unit": "ug/m3", "time": "2020-11-09 16:30:39", "value": 12.5, "averaging": "2 minutes"},
                {"pol": "Temperature", "unit": "Celcius", "time": "2020-11-09 16:30:39", "value": "4.1", "averaging": "2 minutes"},
                {"pol": "Pressure", "unit": "hPa", "time": null, "value": null, "averaging": "2 minutes"},
            ],
        })
    }

    #[test]
    fn parse_ok() -> Result {
        let station = Station::parse(&record("SAVEDNIPRO_17", "Kyiv", "Khreshchatyk St, 22"))?;
        assert_eq!(station.id, "SAVEDNIPRO_17");
        assert_eq!(station.latitude, 50.45);
        assert_eq!(station.pollutants.len(), 3);
        Ok(())
    }

    #[test]
    fn parse_integer_id() -> Result {
        let mut record = record("", "Kyiv", "Khreshchatyk St, 22");
        record["id"] = json!(42);
        assert_eq!(Station::parse(&record)?.id, "42");
        Ok(())
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut record = record("1", "Kyiv", "Khreshchatyk St, 22");
        record.as_object_mut().unwrap().remove("timezone");
        assert!(Station::parse(&record).is_err());
    }

    #[test]
    fn unknown_pollutant_rejects_station() {
        let mut record = record("1", "Kyiv", "Khreshchatyk St, 22");
        record["pollutants"][1]["pol"] = json!("Ozone");
        assert!(Station::parse(&record).is_err());
    }

    #[test]
    fn wrong_value_type_rejects_station() {
        let mut record = record("1", "Kyiv", "Khreshchatyk St, 22");
        record["pollutants"][0]["value"] = json!({"ppm": 1});
        assert!(Station::parse(&record).is_err());
    }

    #[test]
    fn slug_is_lowercase() -> Result {
        let station = Station::parse(&record("SAVEDNIPRO_17", "Kyiv", "Khreshchatyk St, 22"))?;
        assert_eq!(station.slug(), "savednipro_17_kyiv");
        Ok(())
    }

    #[test]
    fn sensors_preserve_pollutant_order() -> Result {
        let station = Station::parse(&record("SAVEDNIPRO_17", "Kyiv", "Khreshchatyk St, 22"))?;
        let kinds: Vec<PollutantKind> = station.sensors().iter().map(|sensor| sensor.kind).collect();
        assert_eq!(
            kinds,
            vec![PollutantKind::Pm25, PollutantKind::Temperature, PollutantKind::Pressure]
        );
        Ok(())
    }

    #[test]
    fn sensor_record_ok() -> Result {
        let station = Station::parse(&record("SAVEDNIPRO_17", "Kyiv", "Khreshchatyk St, 22"))?;
        let now = Local.ymd(2020, 11, 9).and_hms(18, 0, 0);
        let sensor = &station.sensors_at(now)[0];
        assert_eq!(sensor.name, "PM2_5 (Kyiv, Khreshchatyk St, 22)");
        assert_eq!(sensor.unique_id, "savednipro_17_kyiv_pm2_5");
        assert_eq!(sensor.station_id, "SAVEDNIPRO_17");
        assert_eq!(sensor.state, Some(12.5));
        assert_eq!(sensor.unit_of_measurement(), "µg/m³");
        assert_eq!(sensor.attributes.updated_at.as_deref(), Some("09.11.2020, 16:30:39"));
        assert_eq!(sensor.attributes.averaging, "2 minutes");
        assert_eq!(sensor.attributes.local_name, "Kyivska oblast");
        assert!(!sensor.deprecated);
        Ok(())
    }

    #[test]
    fn stale_sensor_is_deprecated() -> Result {
        let station = Station::parse(&record("SAVEDNIPRO_17", "Kyiv", "Khreshchatyk St, 22"))?;
        let now = Local.ymd(2020, 11, 10).and_hms(4, 30, 40);
        let sensors = station.sensors_at(now);
        assert!(sensors[0].deprecated);
        assert!(sensors[2].deprecated);
        Ok(())
    }
}
