//! Sets up the sensors and keeps them updated.

use crate::core::client::Feed;
use crate::core::error::NotReady;
use crate::host::entity::AirSensor;
use crate::prelude::*;

/// Does the initial forced refresh and creates a sensor per pollutant of every matching station.
///
/// An unreachable feed fails with [`NotReady`] in the error chain.
pub async fn setup<F: Feed>(registry: Arc<Registry<F>>, filter: &StationFilter) -> Result<Vec<AirSensor<F>>> {
    if !registry.refresh(true).await.context(NotReady)? {
        warn!("The initial refresh has failed, no stations yet.");
    }
    let sensors: Vec<AirSensor<F>> = registry
        .filter(filter)
        .iter()
        .flat_map(Station::sensors)
        .map(|record| AirSensor::new(registry.clone(), record))
        .collect();
    debug!("Setup is done. {} sensors added.", sensors.len());
    Ok(sensors)
}

/// Updates every sensor, logging the failures.
pub async fn update_all<F: Feed>(sensors: &mut [AirSensor<F>]) {
    for sensor in sensors.iter_mut() {
        match sensor.update().await {
            Ok(_) => {
                info!("{} = {} {}", sensor.name(), sensor.state(), sensor.unit_of_measurement());
                debug!("{}: {:?}", sensor.unique_id(), sensor.attributes());
            }
            Err(error) => error!("Failed to update `{}`: {}", sensor.name(), error),
        }
    }
}
