mod app;
mod cli;
mod config;
mod consts;
mod credential;
mod error;
mod fetch;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.verbose);
    if let Some(path) = &config.loaded_from {
        tracing::debug!("loaded config from {}", path.display());
    }

    match app::run(&cli, &config) {
        Ok(report) => {
            if cli.quiet {
                return;
            }
            println!(
                "Fetched {} input(s) for {}",
                report.written.len(),
                cli.year
            );
            if let Some(day) = report.unreleased_day {
                println!("Day {day} of {} is not available yet", cli.year);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
