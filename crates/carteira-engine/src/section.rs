//! Section aggregation.
//!
//! A section is a named group of holdings inside one category (e.g. the
//! "value" stocks). Every per-holding derived figure is computed here and
//! rolled up into section totals.

use crate::aggregation::{gap, mean, share, sum, ValueField};
use crate::types::{Holding, TargetPolicy};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A holding enriched with its derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    /// The source holding, unchanged.
    #[serde(flatten)]
    pub holding: Holding,

    /// Current value used for every derivation (negative/non-finite read as 0).
    pub display_value: f64,

    /// Target actually used for the gap, after the target policy.
    pub effective_target: f64,

    /// Share of the whole portfolio (0-100).
    pub risk_share: f64,

    /// Share of the holding's category (0-100).
    pub category_share: f64,

    /// `effective_target - category_share`.
    pub gap_percent: f64,

    /// Amount to invest to reach target, measured against the category total.
    pub contribution_needed: f64,

    /// Return on cost, as a percentage.
    pub return_percent: f64,
}

impl HoldingRow {
    /// Derives the row for one holding.
    #[must_use]
    pub fn derive(
        holding: &Holding,
        portfolio_total: f64,
        category_total: f64,
        policy: TargetPolicy,
    ) -> Self {
        if holding.is_value_clamped() {
            warn!(
                "Holding {} has current value {}; using 0 for shares",
                holding.id, holding.current_value
            );
        }

        let display_value = holding.display_value();
        let category_share = share(display_value, category_total);
        let effective_target = policy.apply(holding.target_percent);
        let g = gap(category_share, effective_target, category_total);

        Self {
            holding: holding.clone(),
            display_value,
            effective_target,
            risk_share: share(display_value, portfolio_total),
            category_share,
            gap_percent: g.gap_percent,
            contribution_needed: g.contribution_needed,
            return_percent: holding.return_percent(),
        }
    }

    /// Returns the holding ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.holding.id
    }
}

/// Rolled-up figures for a section or a whole category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of holdings.
    pub holding_count: usize,

    /// Sum of quantities.
    pub total_quantity: f64,

    /// Sum of applied values.
    pub total_applied_value: f64,

    /// Sum of display-safe current values.
    pub total_current_value: f64,

    /// Sum of risk shares (percent of the whole portfolio).
    pub total_risk: f64,

    /// Sum of category shares.
    pub total_category_share: f64,

    /// Sum of effective targets.
    pub total_target: f64,

    /// Sum of gaps.
    pub total_gap: f64,

    /// Sum of contributions needed.
    pub total_contribution_needed: f64,

    /// Unweighted mean of the holdings' returns.
    ///
    /// Every category view uses the simple mean, not a value-weighted one.
    pub average_return: f64,
}

impl Totals {
    /// Returns true if no holding contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holding_count == 0
    }

    /// Rolls up already-derived rows.
    #[must_use]
    pub fn from_rows(rows: &[HoldingRow]) -> Self {
        let holdings = rows.iter().map(|r| &r.holding);
        Self {
            holding_count: rows.len(),
            total_quantity: sum(holdings.clone(), ValueField::Quantity),
            total_applied_value: sum(holdings.clone(), ValueField::AppliedValue),
            total_current_value: sum(holdings, ValueField::CurrentValue),
            total_risk: rows.iter().map(|r| r.risk_share).sum(),
            total_category_share: rows.iter().map(|r| r.category_share).sum(),
            total_target: rows.iter().map(|r| r.effective_target).sum(),
            total_gap: rows.iter().map(|r| r.gap_percent).sum(),
            total_contribution_needed: rows.iter().map(|r| r.contribution_needed).sum(),
            average_return: mean(rows.iter().map(|r| r.return_percent)),
        }
    }
}

/// One section of a category with its rows and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Section key (e.g. "value", "post_fixed").
    pub key: String,

    /// Rows in snapshot order.
    pub holdings: Vec<HoldingRow>,

    /// Section totals.
    pub totals: Totals,
}

impl SectionReport {
    /// Creates a zeroed placeholder for a section with no holdings.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            holdings: Vec::new(),
            totals: Totals::default(),
        }
    }

    /// Returns true if the section has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Aggregates the holdings of one section.
///
/// Each holding gets a risk share against `portfolio_total`, a category
/// share against `category_total`, and a gap/contribution against its own
/// target. An empty slice yields a zeroed placeholder.
#[must_use]
pub fn aggregate_section(
    key: &str,
    holdings: &[&Holding],
    portfolio_total: f64,
    category_total: f64,
    policy: TargetPolicy,
) -> SectionReport {
    if holdings.is_empty() {
        return SectionReport::empty(key);
    }

    let rows: Vec<HoldingRow> = holdings
        .iter()
        .map(|h| HoldingRow::derive(h, portfolio_total, category_total, policy))
        .collect();
    let totals = Totals::from_rows(&rows);

    SectionReport {
        key: key.to_string(),
        holdings: rows,
        totals,
    }
}
