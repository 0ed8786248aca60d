//! Cross-category allocation-vs-target table.
//!
//! Unlike per-holding rows, which measure contributions against their
//! category total, this table measures everything against the
//! whole-portfolio total.

use crate::aggregation::{gap, share};
use crate::types::{AllocationStatus, AllocationTarget, Category};
use serde::{Deserialize, Serialize};

/// One asset class in the allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Asset class.
    pub category: Category,

    /// Current value of the class (its category total).
    pub current_value: f64,

    /// Share of the whole portfolio (0-100).
    pub current_percent: f64,

    /// Target percentage, 0 when the class has no target row.
    pub target: f64,

    /// Lower bound of the band.
    pub minimum: f64,

    /// Upper bound of the band.
    pub maximum: f64,

    /// False when the class holds value but has no target row.
    pub has_target: bool,

    /// `target - current_percent`.
    pub gap_percent: f64,

    /// Amount to invest to reach target, measured against the portfolio total.
    pub contribution_needed: f64,

    /// Position relative to the band.
    pub status: AllocationStatus,
}

/// The allocation table with column totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationTable {
    /// Rows in canonical category order.
    pub rows: Vec<AllocationRow>,

    /// Sum of current percentages.
    pub total_current_percent: f64,

    /// Sum of targets.
    pub total_target: f64,

    /// Sum of contributions needed.
    pub total_contribution_needed: f64,
}

impl AllocationTable {
    /// Returns the row of one asset class.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&AllocationRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Rows below their minimum.
    pub fn below_minimum(&self) -> impl Iterator<Item = &AllocationRow> {
        self.rows
            .iter()
            .filter(|r| r.status == AllocationStatus::BelowMinimum)
    }

    /// Rows above their maximum.
    pub fn above_maximum(&self) -> impl Iterator<Item = &AllocationRow> {
        self.rows
            .iter()
            .filter(|r| r.status == AllocationStatus::AboveMaximum)
    }
}

/// Builds one allocation row.
#[must_use]
pub fn allocation_row(
    category: Category,
    class_value: f64,
    target: Option<&AllocationTarget>,
    portfolio_total: f64,
) -> AllocationRow {
    let has_target = target.is_some();
    let target = target
        .copied()
        .unwrap_or_else(|| AllocationTarget::new(category, 0.0));
    let current_percent = share(class_value, portfolio_total);
    let g = gap(current_percent, target.target, portfolio_total);

    AllocationRow {
        category,
        current_value: class_value,
        current_percent,
        target: target.target,
        minimum: target.minimum,
        maximum: target.maximum,
        has_target,
        gap_percent: g.gap_percent,
        contribution_needed: g.contribution_needed,
        status: target.status(current_percent),
    }
}

/// Builds the allocation table.
///
/// `class_values` are the category totals in canonical order. A row is
/// emitted for every class with a target row or a positive value; when a
/// class has several target rows the first one is used.
#[must_use]
pub fn build_allocation_table(
    class_values: &[(Category, f64)],
    targets: &[AllocationTarget],
    portfolio_total: f64,
) -> AllocationTable {
    let rows: Vec<AllocationRow> = class_values
        .iter()
        .filter_map(|&(category, value)| {
            let target = targets.iter().find(|t| t.category == category);
            if target.is_none() && value <= 0.0 {
                return None;
            }
            Some(allocation_row(category, value, target, portfolio_total))
        })
        .collect();

    AllocationTable {
        total_current_percent: rows.iter().map(|r| r.current_percent).sum(),
        total_target: rows.iter().map(|r| r.target).sum(),
        total_contribution_needed: rows.iter().map(|r| r.contribution_needed).sum(),
        rows,
    }
}
