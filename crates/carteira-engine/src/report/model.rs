//! Report output types.

use super::AllocationTable;
use crate::error::PortfolioResult;
use crate::section::{HoldingRow, SectionReport, Totals};
use crate::types::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One asset category (dashboard tab) with its sections and grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// The category.
    pub category: Category,

    /// Denominator for category shares and per-holding contributions.
    pub category_total: f64,

    /// Sections in layout order, including empty placeholders.
    pub sections: Vec<SectionReport>,

    /// Holdings whose section is not part of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unclassified: Option<SectionReport>,

    /// Grand-total row. `total_category_share` is exactly 100 whenever the
    /// category total is positive.
    pub totals: Totals,
}

impl CategoryReport {
    /// Returns true if the category holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Returns a section by key, including the unclassified bucket.
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&SectionReport> {
        self.sections
            .iter()
            .chain(self.unclassified.iter())
            .find(|s| s.key == key)
    }

    /// Iterates over every row of the category, sections first.
    pub fn rows(&self) -> impl Iterator<Item = &HoldingRow> {
        self.sections
            .iter()
            .chain(self.unclassified.iter())
            .flat_map(|s| s.holdings.iter())
    }
}

/// Whole-portfolio figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Portfolio total as supplied by the snapshot.
    pub portfolio_total: f64,

    /// Number of holdings across all categories.
    pub holding_count: usize,

    /// Sum of applied values across all categories.
    pub total_applied_value: f64,

    /// Sum of display-safe current values across all categories.
    pub total_current_value: f64,

    /// Return on cost of the whole portfolio, as a percentage.
    pub overall_return: f64,

    /// Part of the portfolio total not covered by any holding (0-100).
    pub unallocated_percent: f64,
}

/// Full output of one report computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceReport {
    /// As-of date copied from the snapshot.
    pub as_of: Option<NaiveDate>,

    /// Every category, in canonical order.
    pub categories: Vec<CategoryReport>,

    /// Cross-category allocation-vs-target table.
    pub allocation: AllocationTable,

    /// Whole-portfolio figures.
    pub summary: PortfolioSummary,
}

impl RebalanceReport {
    /// Returns the report of one category.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Finds a holding row by holding ID.
    #[must_use]
    pub fn holding(&self, id: &str) -> Option<&HoldingRow> {
        self.rows().find(|r| r.id() == id)
    }

    /// Iterates over every holding row, in category then section order.
    pub fn rows(&self) -> impl Iterator<Item = &HoldingRow> {
        self.categories.iter().flat_map(CategoryReport::rows)
    }

    /// Categories holding at least one position.
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.iter().filter(|c| !c.is_empty())
    }

    /// Serializes the report to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PortfolioError::Serialization`] on serializer failure.
    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
