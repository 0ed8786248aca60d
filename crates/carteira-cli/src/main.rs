//! Carteira CLI - Command-line interface for portfolio allocation reports.
//!
//! # Usage
//!
//! ```bash
//! # Full report, every category with holdings
//! carteira report snapshot.json
//!
//! # One category only
//! carteira report snapshot.json --category stock
//!
//! # Allocation vs. target bands as JSON
//! carteira --format json allocation snapshot.json
//!
//! # Validate a snapshot, failing on any finding
//! carteira check snapshot.json --strict
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Report(args) => commands::report::execute(args, format, &config)?,
        Commands::Allocation(args) => commands::allocation::execute(args, format, &config)?,
        Commands::Check(args) => commands::check::execute(args, format, &config)?,
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV output stay machine-readable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,carteira=debug,carteira_engine=debug"
    } else {
        "warn,carteira=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
