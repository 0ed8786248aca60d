//! Report command implementation.
//!
//! Prints every category with its sections and grand total, then the
//! allocation table and the portfolio summary.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use carteira_engine::{
    build_report, Category, CategoryReport, HoldingRow, PortfolioSummary, RebalanceReport,
    SectionReport, Totals,
};

use crate::cli::OutputFormat;
use crate::commands::allocation::allocation_lines;
use crate::commands::load_snapshot;
use crate::config::{CliConfig, OutputSettings};
use crate::output::{
    format_amount, format_percent, format_quantity, print_header, print_json, print_output,
    KeyValue,
};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Only show one category (e.g. stock, fii, fixed_income)
    #[arg(long)]
    pub category: Option<Category>,
}

/// One printable holding, subtotal or total line.
#[derive(Debug, Serialize, Tabled)]
pub struct HoldingLine {
    #[tabled(skip)]
    pub category: String,
    #[tabled(rename = "Section")]
    pub section: String,
    #[tabled(rename = "Asset")]
    pub asset: String,
    #[tabled(rename = "Qty")]
    pub quantity: String,
    #[tabled(rename = "Applied")]
    pub applied: String,
    #[tabled(rename = "Current")]
    pub current: String,
    #[tabled(rename = "Portfolio %")]
    pub risk: String,
    #[tabled(rename = "Category %")]
    pub share: String,
    #[tabled(rename = "Target")]
    pub target: String,
    #[tabled(rename = "Gap")]
    pub gap: String,
    #[tabled(rename = "Contribution")]
    pub contribution: String,
    #[tabled(rename = "Return")]
    pub return_percent: String,
}

impl HoldingLine {
    fn from_row(category: Category, section: &str, row: &HoldingRow, dp: u32) -> Self {
        Self {
            category: category.code().to_string(),
            section: section.to_string(),
            asset: row.id().to_string(),
            quantity: format_quantity(row.holding.quantity),
            applied: format_amount(row.holding.applied_value, dp),
            current: format_amount(row.display_value, dp),
            risk: format_percent(row.risk_share, dp),
            share: format_percent(row.category_share, dp),
            target: format_percent(row.effective_target, dp),
            gap: format_percent(row.gap_percent, dp),
            contribution: format_amount(row.contribution_needed, dp),
            return_percent: format_percent(row.return_percent, dp),
        }
    }

    fn from_totals(
        category: Category,
        section: &str,
        label: &str,
        totals: &Totals,
        dp: u32,
    ) -> Self {
        Self {
            category: category.code().to_string(),
            section: section.to_string(),
            asset: label.to_string(),
            quantity: format_quantity(totals.total_quantity),
            applied: format_amount(totals.total_applied_value, dp),
            current: format_amount(totals.total_current_value, dp),
            risk: format_percent(totals.total_risk, dp),
            share: format_percent(totals.total_category_share, dp),
            target: format_percent(totals.total_target, dp),
            gap: format_percent(totals.total_gap, dp),
            contribution: format_amount(totals.total_contribution_needed, dp),
            return_percent: format_percent(totals.average_return, dp),
        }
    }
}

fn sections_of(category: &CategoryReport) -> impl Iterator<Item = &SectionReport> {
    category.sections.iter().chain(category.unclassified.iter())
}

/// Lines of one category: rows and section subtotals, then the grand total.
fn category_lines(category: &CategoryReport, settings: &OutputSettings) -> Vec<HoldingLine> {
    let dp = settings.decimals;
    let mut lines = Vec::new();

    for section in sections_of(category) {
        if section.is_empty() && !settings.show_empty {
            continue;
        }
        for row in &section.holdings {
            let line = HoldingLine::from_row(category.category, &section.key, row, dp);
            lines.push(line);
        }
        lines.push(HoldingLine::from_totals(
            category.category,
            &section.key,
            "Subtotal",
            &section.totals,
            dp,
        ));
    }

    lines.push(HoldingLine::from_totals(
        category.category,
        "",
        "Total",
        &category.totals,
        dp,
    ));
    lines
}

/// Holding rows only, for CSV export.
fn flat_lines<'a>(
    categories: impl Iterator<Item = &'a CategoryReport>,
    dp: u32,
) -> Vec<HoldingLine> {
    categories
        .flat_map(|c| {
            sections_of(c).flat_map(move |s| {
                s.holdings
                    .iter()
                    .map(move |r| HoldingLine::from_row(c.category, &s.key, r, dp))
            })
        })
        .collect()
}

fn summary_lines(summary: &PortfolioSummary, dp: u32) -> Vec<KeyValue> {
    vec![
        KeyValue::amount("Portfolio Total", summary.portfolio_total, dp),
        KeyValue::new("Holdings", summary.holding_count.to_string()),
        KeyValue::amount("Applied", summary.total_applied_value, dp),
        KeyValue::amount("Current", summary.total_current_value, dp),
        KeyValue::percent("Return", summary.overall_return, dp),
        KeyValue::percent("Unallocated", summary.unallocated_percent, dp),
    ]
}

fn selected<'a>(
    report: &'a RebalanceReport,
    filter: Option<Category>,
    settings: &OutputSettings,
) -> Vec<&'a CategoryReport> {
    report
        .categories
        .iter()
        .filter(|c| match filter {
            Some(only) => c.category == only,
            None => settings.show_empty || !c.is_empty(),
        })
        .collect()
}

/// Execute the report command.
pub fn execute(args: ReportArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let report = build_report(&snapshot, &config.engine);
    let settings = &config.output;
    let categories = selected(&report, args.category, settings);

    match format {
        OutputFormat::Table => {
            if categories.is_empty() {
                println!("No holdings.");
            }
            for category in &categories {
                print_header(&format!(
                    "{} ({})",
                    category.category.name(),
                    format_amount(category.category_total, settings.decimals)
                ));
                print_output(&category_lines(category, settings), format)?;
            }

            if args.category.is_none() {
                print_header("Allocation vs. Target");
                print_output(
                    &allocation_lines(&report.allocation, settings.decimals, true),
                    format,
                )?;

                print_header("Summary");
                print_output(&summary_lines(&report.summary, settings.decimals), format)?;
            }
        }
        OutputFormat::Json => match args.category {
            Some(_) => print_json(&categories)?,
            None => println!("{}", report.to_json()?),
        },
        OutputFormat::Csv => {
            let lines = flat_lines(categories.into_iter(), settings.decimals);
            print_output(&lines, format)?;
        }
    }

    Ok(())
}
