mod cli;
mod config;
mod error;
mod generate;
mod logging;
mod progress;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("polyforge v{} starting up", env!("CARGO_PKG_VERSION"));

    match generate::run(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Structure generation failed: {}", e);
            Err(e)
        }
    }
}
