//! Entry point.

use structopt::StructOpt;

use crate::core::client::HttpFeed;
use crate::core::error::{is_not_ready, NotReady};
use crate::host::entity::AirSensor;
use crate::host::{actions, platform};
use crate::logging::Log;
use crate::opts::Opts;
use crate::prelude::*;
use crate::settings::Settings;

mod core;
mod host;
mod logging;
mod opts;
mod prelude;
mod settings;

/// How long to wait before retrying the setup when the feed is unreachable.
const SETUP_RETRY_INTERVAL: Duration = Duration::from_secs(60);

#[async_std::main]
async fn main() -> Result {
    let opts = Opts::from_args();
    logging::init(&opts)?;

    if opts.show_cities || opts.show_city_stations.is_some() {
        return show(&opts).await;
    }

    info!("Reading settings…");
    let settings = settings::read(&opts.settings).log_context("failed to read the settings")?;
    debug!("Settings: {:?}", &settings);

    let registry = Arc::new(Registry::with_feed(HttpFeed::default().with_timeout(settings.timeout())));
    let mut sensors = set_up(&registry, &settings).await.log_context("failed to set up the sensors")?;
    info!(
        "{} sensors are set up, updating every {:?}.",
        sensors.len(),
        settings.interval()
    );
    loop {
        platform::update_all(&mut sensors).await;
        task::sleep(settings.interval()).await;
    }
}

/// Sets up the sensors, waiting for the feed to become reachable.
async fn set_up(registry: &Arc<Registry>, settings: &Settings) -> Result<Vec<AirSensor>> {
    loop {
        match platform::setup(registry.clone(), &settings.filter).await {
            Ok(sensors) => return Ok(sensors),
            Err(error) if is_not_ready(&error) => {
                warn!("{:#}. Retrying in {:?}…", error, SETUP_RETRY_INTERVAL);
                task::sleep(SETUP_RETRY_INTERVAL).await;
            }
            Err(error) => return Err(error),
        }
    }
}

/// Runs the requested action and prints its notification.
async fn show(opts: &Opts) -> Result {
    let registry = Registry::new();
    if !registry.refresh(true).await.context(NotReady).log_context("failed to load the stations")? {
        return Err(anyhow!("the feed has responded with an error"));
    }
    let notification = if opts.show_cities {
        actions::show_cities(&registry)
    } else {
        actions::show_city_stations(&registry, opts.show_city_stations.as_ref().and_then(Option::as_deref))
    };
    println!("{}", notification);
    Ok(())
}
