//! jsonmerge CLI
//!
//! Merge JSON record files into one deduplicated, sorted array.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use jsonmerge_cli::cli::{Cli, Command};
use jsonmerge_cli::config_handlers::handle_config_command;
use jsonmerge_cli::{commands, logging};
use jsonmerge_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        // A broken config file must not prevent fixing it.
        Command::Config { .. } => Config::load(cli.config.as_deref()).unwrap_or_default(),
        _ => Config::load(cli.config.as_deref())?,
    };
    logging::init(cli.verbose, &config.logging.level);

    match cli.command {
        Command::Merge(args) => {
            commands::run_merge(&config, &args).await?;
        }
        Command::Summary { file } => commands::print_summary(&file)?,
        Command::Config { action } => handle_config_command(cli.config.as_deref(), action)?,
    }

    Ok(())
}
