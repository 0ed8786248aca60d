//! Portfolio-wide allocation targets.

use super::Category;
use serde::{Deserialize, Serialize};

/// Target band for one top-level asset class, as percentages of the whole
/// portfolio.
///
/// These rows are independent of holdings and are only used by the
/// cross-category allocation table. A missing bound reads as the target
/// itself, the same band [`AllocationTarget::new`] gives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TargetRow")]
pub struct AllocationTarget {
    /// Asset class this row applies to.
    pub category: Category,

    /// Lower bound of the tolerated band (0-100).
    pub minimum: f64,

    /// Upper bound of the tolerated band (0-100).
    pub maximum: f64,

    /// Target percentage (0-100).
    pub target: f64,
}

/// Input form of a target row, with optional bounds.
#[derive(Deserialize)]
struct TargetRow {
    category: Category,
    minimum: Option<f64>,
    maximum: Option<f64>,
    target: f64,
}

impl From<TargetRow> for AllocationTarget {
    fn from(row: TargetRow) -> Self {
        Self {
            category: row.category,
            minimum: row.minimum.unwrap_or(row.target),
            maximum: row.maximum.unwrap_or(row.target),
            target: row.target,
        }
    }
}

impl AllocationTarget {
    /// Creates a target with a band equal to the target itself.
    #[must_use]
    pub fn new(category: Category, target: f64) -> Self {
        Self {
            category,
            minimum: target,
            maximum: target,
            target,
        }
    }

    /// Sets the tolerated band.
    #[must_use]
    pub fn with_band(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Classifies a current percentage against the band.
    #[must_use]
    pub fn status(&self, current_percent: f64) -> AllocationStatus {
        if current_percent < self.minimum {
            AllocationStatus::BelowMinimum
        } else if current_percent > self.maximum {
            AllocationStatus::AboveMaximum
        } else {
            AllocationStatus::WithinRange
        }
    }
}

/// Position of a current allocation relative to its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Under the minimum of the band
    BelowMinimum,
    /// Inside the band (bounds inclusive)
    WithinRange,
    /// Over the maximum of the band
    AboveMaximum,
}

impl AllocationStatus {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BelowMinimum => "Below minimum",
            Self::WithinRange => "Within range",
            Self::AboveMaximum => "Above maximum",
        }
    }
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
