//! Report assembly.
//!
//! Fans the snapshot out per category, aggregates every section, and
//! assembles category grand totals, the allocation table and the
//! portfolio summary.

use super::{build_allocation_table, CategoryReport, PortfolioSummary, RebalanceReport};
use crate::aggregation::{maybe_parallel_map, mean, return_percent, sum, ValueField};
use crate::section::{aggregate_section, SectionReport, Totals};
use crate::types::{Category, Holding, PortfolioSnapshot, ReportConfig};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Key of the section collecting holdings outside the layout.
pub const UNCLASSIFIED_SECTION: &str = "unclassified";

/// Builds reports from snapshots with a fixed configuration.
///
/// # Example
///
/// ```ignore
/// use carteira_engine::prelude::*;
///
/// let builder = ReportBuilder::new().with_config(ReportConfig::sequential());
/// let report = builder.build(&snapshot);
///
/// for row in &report.allocation.rows {
///     println!("{}: {:.2}%", row.category, row.current_percent);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Builds the report for a snapshot.
    #[must_use]
    pub fn build(&self, snapshot: &PortfolioSnapshot) -> RebalanceReport {
        build_report(snapshot, &self.config)
    }
}

/// Builds the full report for a snapshot.
///
/// Never fails: degenerate denominators yield zeros, and non-finite or
/// negative current values are read as 0. Categories are processed in
/// canonical order, in parallel when the configuration allows it; the
/// output is identical either way.
#[must_use]
pub fn build_report(snapshot: &PortfolioSnapshot, config: &ReportConfig) -> RebalanceReport {
    debug!(
        "Building report for {} holdings, portfolio total {}",
        snapshot.holding_count(),
        snapshot.portfolio_total
    );

    let categories = maybe_parallel_map(
        Category::all(),
        snapshot.holding_count(),
        config,
        |&category| build_category(category, snapshot, config),
    );

    let class_values: Vec<(Category, f64)> = categories
        .iter()
        .map(|c| (c.category, c.category_total))
        .collect();
    let allocation =
        build_allocation_table(&class_values, &snapshot.targets, snapshot.portfolio_total);
    let summary = summarize(&categories, snapshot.portfolio_total);

    debug!(
        "Report built: {} non-empty categories, {} allocation rows",
        categories.iter().filter(|c| !c.is_empty()).count(),
        allocation.rows.len()
    );

    RebalanceReport {
        as_of: snapshot.as_of,
        categories,
        allocation,
        summary,
    }
}

/// Builds the report of one category.
///
/// Sections follow the configured layout (repeated keys are skipped).
/// Holdings whose section is not in the layout land in the
/// [`UNCLASSIFIED_SECTION`] bucket after the layout sections.
#[must_use]
pub fn build_category(
    category: Category,
    snapshot: &PortfolioSnapshot,
    config: &ReportConfig,
) -> CategoryReport {
    let holdings: Vec<&Holding> = snapshot.holdings_in(category).collect();
    let category_total = sum(holdings.iter().copied(), ValueField::CurrentValue);
    let portfolio_total = snapshot.portfolio_total;
    let policy = config.target_policy;

    let mut seen = HashSet::new();
    let layout: Vec<String> = config
        .sections_for(category)
        .into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect();

    let sections: Vec<SectionReport> = layout
        .iter()
        .map(|key| {
            let members: Vec<&Holding> = holdings
                .iter()
                .copied()
                .filter(|h| h.section == *key)
                .collect();
            aggregate_section(key, &members, portfolio_total, category_total, policy)
        })
        .collect();

    let leftovers: Vec<&Holding> = holdings
        .iter()
        .copied()
        .filter(|h| !seen.contains(&h.section))
        .collect();
    let unclassified = if leftovers.is_empty() {
        None
    } else {
        warn!(
            "{} {} holding(s) have sections outside the layout; grouped as {}",
            leftovers.len(),
            category,
            UNCLASSIFIED_SECTION
        );
        Some(aggregate_section(
            UNCLASSIFIED_SECTION,
            &leftovers,
            portfolio_total,
            category_total,
            policy,
        ))
    };

    let totals = category_totals(&sections, unclassified.as_ref(), category_total);

    CategoryReport {
        category,
        category_total,
        sections,
        unclassified,
        totals,
    }
}

/// Rolls section totals up into the category grand total.
///
/// Sums are taken over section totals, except the current value, which is
/// the category total itself so the grand total and the allocation row agree.
/// The average return is the simple mean over every holding of the category,
/// and the category share total is pinned to exactly 100 whenever the
/// category holds value.
fn category_totals(
    sections: &[SectionReport],
    unclassified: Option<&SectionReport>,
    category_total: f64,
) -> Totals {
    let all: Vec<&SectionReport> = sections.iter().chain(unclassified).collect();
    let fold = |f: fn(&Totals) -> f64| all.iter().map(|s| f(&s.totals)).sum::<f64>();

    Totals {
        holding_count: all.iter().map(|s| s.totals.holding_count).sum(),
        total_quantity: fold(|t| t.total_quantity),
        total_applied_value: fold(|t| t.total_applied_value),
        total_current_value: category_total,
        total_risk: fold(|t| t.total_risk),
        total_category_share: if category_total > 0.0 { 100.0 } else { 0.0 },
        total_target: fold(|t| t.total_target),
        total_gap: fold(|t| t.total_gap),
        total_contribution_needed: fold(|t| t.total_contribution_needed),
        average_return: mean(
            all.iter()
                .flat_map(|s| s.holdings.iter())
                .map(|r| r.return_percent),
        ),
    }
}

fn summarize(categories: &[CategoryReport], portfolio_total: f64) -> PortfolioSummary {
    let total_applied_value: f64 = categories
        .iter()
        .map(|c| c.totals.total_applied_value)
        .sum();
    let total_current_value: f64 = categories
        .iter()
        .map(|c| c.totals.total_current_value)
        .sum();
    let total_risk: f64 = categories.iter().map(|c| c.totals.total_risk).sum();

    let unallocated_percent = if portfolio_total.is_finite() && portfolio_total > 0.0 {
        (100.0 - total_risk).max(0.0)
    } else {
        0.0
    };

    PortfolioSummary {
        portfolio_total,
        holding_count: categories.iter().map(|c| c.totals.holding_count).sum(),
        total_applied_value,
        total_current_value,
        overall_return: return_percent(total_current_value, total_applied_value),
        unallocated_percent,
    }
}
