pub use crate::core::pollutant::{Pollutant, PollutantKind};
pub use crate::core::registry::{Registry, StationFilter};
pub use crate::core::sensor::SensorRecord;
pub use crate::core::station::Station;
pub use anyhow::{anyhow, Context};
pub use async_std::task;
pub use chrono::prelude::*;
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Deserializer};
pub use std::sync::Arc;
pub use std::time::Duration;

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
