use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "save-eco-bot", author, about)]
pub struct Opts {
    /// Show only warnings and errors
    #[structopt(short = "s", long = "silent", conflicts_with = "verbose")]
    pub silent: bool,

    /// Show all log messages
    #[structopt(short = "v", long = "verbose", conflicts_with = "silent")]
    pub verbose: bool,

    /// Suppress timestamps in logs, useful with journald
    #[structopt(long = "suppress-log-timestamps")]
    pub suppress_log_timestamps: bool,

    /// Print the available cities and exit
    #[structopt(long = "show-cities")]
    pub show_cities: bool,

    /// Print the stations in the city and exit
    #[structopt(long = "show-city-stations", value_name = "CITY")]
    pub show_city_stations: Option<Option<String>>,

    /// Setting files, the latter override the former
    #[structopt(parse(from_os_str), env = "SAVE_ECO_BOT_SETTINGS", default_value = "save-eco-bot.toml")]
    pub settings: Vec<PathBuf>,
}
