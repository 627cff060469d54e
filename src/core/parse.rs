//! Lenient scalar deserializers for the loosely typed feed.

use serde::de::Error;
use serde_json::Value;

use crate::prelude::*;

/// Deserializes a number which may also come as a numeric string.
pub fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("`{}` is not a finite number", number))),
        Value::String(string) => string
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("`{}` is not a number", string))),
        other => Err(D::Error::custom(format!("expected a number, got `{}`", other))),
    }
}

pub fn deserialize_optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => deserialize_number(value).map(Some).map_err(D::Error::custom),
    }
}

/// Deserializes an identifier which may come either as a string or as an integer.
pub fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected an ID, got `{}`", other))),
    }
}

/// Deserializes the feed timestamp into `DateTime<Local>`.
///
/// RFC 3339 timestamps keep their offset, naive ones are taken as local time.
pub fn deserialize_optional_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Local>>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(timestamp) => parse_timestamp(&timestamp).map(Some).map_err(D::Error::custom),
    }
}

/// Naive timestamp formats. `%.f` also matches no fraction at all.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Local>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(timestamp.with_timezone(&Local));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
        .ok_or_else(|| anyhow!("`{}` is not a timestamp", timestamp))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| anyhow!("`{}` does not exist in the local timezone", timestamp))
}
