//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{AllocationArgs, CheckArgs, ReportArgs};

/// Carteira - Portfolio allocation and rebalancing reports
#[derive(Parser)]
#[command(name = "carteira")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults to ./carteira.toml when present.
    #[arg(short, long, global = true, env = "CARTEIRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Full report: category sections, grand totals, allocation and summary
    Report(ReportArgs),

    /// Allocation of each asset class against its target band
    Allocation(AllocationArgs),

    /// List non-fatal data issues found in a snapshot
    Check(CheckArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format (raw numbers)
    Json,
    /// CSV format
    Csv,
}
