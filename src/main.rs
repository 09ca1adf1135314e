mod app;
mod catalog;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod pricing;
mod summarize;
mod utils;

use clap::Parser;

use cli::Cli;
use config::{Config, ConfigNote};

fn main() {
    let (config, notes) = Config::load();
    let cli = Cli::parse().with_config(config);

    logging::init(cli.debug);
    for note in notes {
        match note {
            ConfigNote::Loaded(path) => tracing::debug!("Loaded config from {}", path.display()),
            ConfigNote::Problem(message) => tracing::warn!("{message}"),
        }
    }

    if let Err(e) = app::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
