//! credit - CRediT statement generator
//!
//! Builds an authors-by-roles table from a pasted author list, edits it
//! in place as JSON or JATS XML, and prints the CRediT paragraphs.

mod cli;
mod commands;
mod config;
mod error;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Setup logging
    init_tracing(cli.verbose, &config.logging.filter);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)?;

    Ok(())
}

/// `RUST_LOG` wins, then `-v`, then the configured filter
fn init_tracing(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new(configured),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
