use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use hxmlgen::{cli::input::CliArgs, utils::logger::config_logger, worker::run_hxmlgen};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;

    log::debug!("Launching a new hxmlgen program");
    run_hxmlgen(&cli_args, Path::new("."))?;
    log::debug!("Tasks successfully finished");

    Ok(())
}
