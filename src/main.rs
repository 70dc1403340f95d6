mod classify;
mod cli;
mod error;
mod table;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            input,
            network,
            source,
            locale,
            config,
            verbose,
        } => {
            init_tracing(verbose);
            classify::execute(input, network, source, locale.map(Into::into), config, verbose)
        }
        Commands::Table { locale, config } => {
            init_tracing(false);
            table::execute(locale.map(Into::into), config)
        }
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
