mod api;
mod cli;
mod config;
mod dashboard;
mod location;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs::File;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn init_logging(tui: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if tui {
        // stderr would draw over the dashboard
        let file = AppConfig::ensure_data_dir()
            .ok()
            .and_then(|dir| File::create(dir.join("vakit.log")).ok());
        match file {
            Some(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none());

    let mut config = AppConfig::load().context("Loading config")?;
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        config.location.latitude = Some(lat);
        config.location.longitude = Some(lon);
    }

    match cli.command {
        Some(Commands::Times { city }) => handlers::handle_times(&config, &city)?,
        Some(Commands::Ramadan { city }) => handlers::handle_ramadan(&config, &city)?,
        Some(Commands::Nearest { lat, lon }) => handlers::handle_nearest(lat, lon)?,
        Some(Commands::Theme { value }) => handlers::handle_theme(&mut config, value.as_deref())?,

        // No subcommand → launch TUI
        None => tui::app::run(config)?,
    }

    Ok(())
}
