//! Host entity backed by one sensor record.

use std::fmt::{Display, Formatter};

use crate::core::client::{Feed, HttpFeed};
use crate::core::sensor::Attributes;
use crate::prelude::*;

/// What the host displays as the entity state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum State {
    Value(f64),

    /// The reading is too old or the station has vanished from the feed.
    Deprecated,

    /// The station reports no value.
    Unknown,
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Value(value) => write!(f, "{}", value),
            State::Deprecated => f.write_str("deprecated"),
            State::Unknown => f.write_str("unknown"),
        }
    }
}

pub struct AirSensor<F = HttpFeed> {
    registry: Arc<Registry<F>>,

    /// The latest known record. It's kept when the station disappears, but marked deprecated.
    record: SensorRecord,
}

impl<F: Feed> AirSensor<F> {
    pub fn new(registry: Arc<Registry<F>>, record: SensorRecord) -> Self {
        Self { registry, record }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn unique_id(&self) -> &str {
        &self.record.unique_id
    }

    pub fn state(&self) -> State {
        if self.record.deprecated {
            return State::Deprecated;
        }
        self.record.state.map_or(State::Unknown, State::Value)
    }

    pub fn unit_of_measurement(&self) -> &str {
        self.record.unit_of_measurement()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.record.attributes
    }

    /// Refreshes the registry, unless it's been refreshed recently, and picks up the new record.
    pub async fn update(&mut self) -> Result {
        if !self.registry.refresh(false).await? {
            debug!("`{}`: the feed has failed, using the previous stations.", self.name());
        }
        match self.registry.get_sensor(&self.record.station_id, self.record.kind) {
            Some(record) => {
                self.record = record;
                debug!("Updated: {}", self.name());
            }
            None => {
                warn!("Error updating `{}`, got no data from the feed.", self.name());
                self.record.deprecated = true;
            }
        }
        Ok(())
    }
}
