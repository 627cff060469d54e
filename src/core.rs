//! Feed fetching, validation and the station registry.

pub mod client;
pub mod error;
pub mod parse;
pub mod pollutant;
pub mod registry;
pub mod sensor;
pub mod station;
