//! Allocation command implementation.
//!
//! Compares each asset class against its portfolio-wide target band.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use carteira_engine::{build_report, AllocationRow, AllocationTable};

use crate::cli::OutputFormat;
use crate::commands::load_snapshot;
use crate::config::CliConfig;
use crate::output::{format_amount, format_percent, print_header, print_json, print_output};

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,
}

/// One printable allocation row.
#[derive(Debug, Serialize, Tabled)]
pub struct AllocationLine {
    #[tabled(rename = "Class")]
    pub class: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Current")]
    pub current: String,
    #[tabled(rename = "Target")]
    pub target: String,
    #[tabled(rename = "Band")]
    pub band: String,
    #[tabled(rename = "Gap")]
    pub gap: String,
    #[tabled(rename = "Contribution")]
    pub contribution: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl AllocationLine {
    fn from_row(row: &AllocationRow, decimals: u32) -> Self {
        let (target, band) = if row.has_target {
            (
                format_percent(row.target, decimals),
                format!(
                    "{} - {}",
                    format_percent(row.minimum, decimals),
                    format_percent(row.maximum, decimals)
                ),
            )
        } else {
            ("-".to_string(), "-".to_string())
        };

        Self {
            class: row.category.name().to_string(),
            value: format_amount(row.current_value, decimals),
            current: format_percent(row.current_percent, decimals),
            target,
            band,
            gap: format_percent(row.gap_percent, decimals),
            contribution: format_amount(row.contribution_needed, decimals),
            status: if row.has_target {
                row.status.to_string()
            } else {
                "no target".to_string()
            },
        }
    }

    fn total(table: &AllocationTable, decimals: u32) -> Self {
        Self {
            class: "Total".to_string(),
            value: format_amount(table.rows.iter().map(|r| r.current_value).sum(), decimals),
            current: format_percent(table.total_current_percent, decimals),
            target: format_percent(table.total_target, decimals),
            band: String::new(),
            gap: String::new(),
            contribution: format_amount(table.total_contribution_needed, decimals),
            status: String::new(),
        }
    }
}

/// Builds printable lines, with a total line for tables.
pub fn allocation_lines(
    table: &AllocationTable,
    decimals: u32,
    with_total: bool,
) -> Vec<AllocationLine> {
    let mut lines: Vec<AllocationLine> = table
        .rows
        .iter()
        .map(|r| AllocationLine::from_row(r, decimals))
        .collect();
    if with_total && !lines.is_empty() {
        lines.push(AllocationLine::total(table, decimals));
    }
    lines
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let report = build_report(&snapshot, &config.engine);
    let decimals = config.output.decimals;

    match format {
        OutputFormat::Table => {
            print_header("Allocation vs. Target");
            let lines = allocation_lines(&report.allocation, decimals, true);
            print_output(&lines, format)?;
        }
        OutputFormat::Json => print_json(&report.allocation)?,
        OutputFormat::Csv => {
            let lines = allocation_lines(&report.allocation, decimals, false);
            print_output(&lines, format)?;
        }
    }

    Ok(())
}
