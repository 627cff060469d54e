//! Terminal logging of the crate's own messages.

use std::fmt::Display;

use log::LevelFilter;
use simplelog::{ConfigBuilder, TermLogger, TerminalMode};

use crate::opts::Opts;
use crate::prelude::*;

/// Records of the dependencies (HTTP client internals mostly) are filtered out.
const TARGET: &str = "save_eco_bot";

pub fn init(opts: &Opts) -> Result {
    let mut config_builder = ConfigBuilder::new();
    config_builder
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_time_format_str("%F %T%.3f")
        .set_time_to_local(true)
        .add_filter_allow_str(TARGET);
    if opts.suppress_log_timestamps {
        config_builder.set_time_level(LevelFilter::Off);
    }
    TermLogger::init(level(opts), config_builder.build(), TerminalMode::Stderr)
        .context("failed to initialize logging")?;
    Ok(())
}

/// Feed validation errors are logged at `Error`, so `--silent` keeps them.
pub fn level(opts: &Opts) -> LevelFilter {
    if opts.silent {
        LevelFilter::Warn
    } else if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub trait Log<T> {
    /// Attaches the context to the error and logs the whole chain.
    fn log_context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Log<T> for Result<T> {
    fn log_context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.context(context).map_err(|error| {
            error!("{:#}", error);
            error
        })
    }
}
