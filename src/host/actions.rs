//! Read-only actions the host may invoke to help with configuration.

use std::fmt::{Display, Formatter};

use crate::core::client::Feed;
use crate::prelude::*;

const CITY_PLACEHOLDER: &str = "<please provide `city: city_name` in service data>";

/// A message to show to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: &'static str,
    pub message: String,
    pub notification_id: &'static str,
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.title, self.message)
    }
}

/// Lists the known cities.
pub fn show_cities<F: Feed>(registry: &Registry<F>) -> Notification {
    let cities = registry.cities().join("\n");
    debug!("Listing cities: {}", cities);
    Notification {
        title: "SaveEcoBot Cities",
        message: format!("Available cities: \n {}", cities),
        notification_id: "save_eco_bot_show_cities",
    }
}

/// Lists the stations in the city, which helps to choose the station IDs.
pub fn show_city_stations<F: Feed>(registry: &Registry<F>, city: Option<&str>) -> Notification {
    debug!("Listing stations in {:?}.", city);
    let city = city.unwrap_or(CITY_PLACEHOLDER);
    let stations = registry
        .city_stations(city)
        .iter()
        .map(|(id, name)| format!("{} - {}", id, name))
        .collect::<Vec<_>>()
        .join("\n");
    Notification {
        title: "SaveEcoBot Stations",
        message: format!("Stations in {}:\n\n {}", city, stations),
        notification_id: "save_eco_bot_show_city_stations",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::tests::{feed_body, refreshed_registry, ScriptedFeed};

    #[async_std::test]
    async fn show_cities_ok() -> Result {
        let registry = refreshed_registry(feed_body()).await?;
        let notification = show_cities(&registry);
        assert_eq!(notification.message, "Available cities: \n Kyiv\nLviv\nOdesa");
        assert_eq!(notification.notification_id, "save_eco_bot_show_cities");
        Ok(())
    }

    #[async_std::test]
    async fn show_city_stations_ok() -> Result {
        let registry = refreshed_registry(feed_body()).await?;
        let notification = show_city_stations(&registry, Some("Kyiv"));
        assert_eq!(
            notification.message,
            "Stations in Kyiv:\n\n 1 - Khreshchatyk St, 22\n3 - Peremohy Ave, 37"
        );
        Ok(())
    }

    #[async_std::test]
    async fn show_city_stations_unknown_city() -> Result {
        let registry = refreshed_registry(feed_body()).await?;
        assert_eq!(show_city_stations(&registry, Some("Nowhere")).message, "Stations in Nowhere:\n\n ");
        Ok(())
    }

    #[test]
    fn show_city_stations_without_city() {
        let registry = Registry::with_feed(ScriptedFeed::new(feed_body()));
        let notification = show_city_stations(&registry, None);
        assert!(notification.message.starts_with("Stations in <please provide"));
    }
}
