//! Portfolio snapshot: the sole input of a report computation.

use super::{AllocationTarget, Category, Holding};
use crate::aggregation::{sum, ValueField};
use crate::error::{PortfolioError, PortfolioResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable view of a portfolio at one point in time.
///
/// Assembled by the data-loading layer; the engine reads it and never
/// fetches anything itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Date the snapshot was taken, if known.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,

    /// Whole-portfolio current value. Denominator for risk shares and the
    /// allocation table.
    pub portfolio_total: f64,

    /// Holdings across all categories.
    #[serde(default)]
    pub holdings: Vec<Holding>,

    /// Portfolio-wide target table, one row per asset class.
    #[serde(default)]
    pub targets: Vec<AllocationTarget>,
}

impl PortfolioSnapshot {
    /// Creates a new snapshot builder.
    #[must_use]
    pub fn builder() -> PortfolioSnapshotBuilder {
        PortfolioSnapshotBuilder::new()
    }

    /// Returns a snapshot with no holdings and no targets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            as_of: None,
            portfolio_total: 0.0,
            holdings: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Serialization`] if the JSON is malformed.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Serialization`] on serializer failure.
    pub fn to_json(&self) -> PortfolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the snapshot has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the holdings of one category, in snapshot order.
    pub fn holdings_in(&self, category: Category) -> impl Iterator<Item = &Holding> {
        self.holdings.iter().filter(move |h| h.category == category)
    }

    /// Returns the category total (sum of display-safe current values).
    #[must_use]
    pub fn category_total(&self, category: Category) -> f64 {
        sum(self.holdings_in(category), ValueField::CurrentValue)
    }

    /// Returns the first target row for a category.
    #[must_use]
    pub fn target_for(&self, category: Category) -> Option<&AllocationTarget> {
        self.targets.iter().find(|t| t.category == category)
    }

    /// Finds a holding by ID.
    #[must_use]
    pub fn get_holding(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }
}

impl Default for PortfolioSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builder for constructing a [`PortfolioSnapshot`].
///
/// When no portfolio total is given, it defaults to the sum of the
/// holdings' display-safe current values.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSnapshotBuilder {
    as_of: Option<NaiveDate>,
    portfolio_total: Option<f64>,
    holdings: Vec<Holding>,
    targets: Vec<AllocationTarget>,
}

impl PortfolioSnapshotBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the as-of date.
    #[must_use]
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Sets the whole-portfolio total explicitly.
    #[must_use]
    pub fn portfolio_total(mut self, total: f64) -> Self {
        self.portfolio_total = Some(total);
        self
    }

    /// Adds a holding.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holdings.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Adds a target row.
    #[must_use]
    pub fn add_target(mut self, target: AllocationTarget) -> Self {
        self.targets.push(target);
        self
    }

    /// Adds multiple target rows.
    #[must_use]
    pub fn add_targets(mut self, targets: impl IntoIterator<Item = AllocationTarget>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit portfolio total is not finite.
    pub fn build(self) -> PortfolioResult<PortfolioSnapshot> {
        let portfolio_total = match self.portfolio_total {
            Some(total) if !total.is_finite() => {
                return Err(PortfolioError::invalid_snapshot(format!(
                    "portfolio total must be finite, got {total}"
                )));
            }
            Some(total) => total,
            None => sum(&self.holdings, ValueField::CurrentValue),
        };

        Ok(PortfolioSnapshot {
            as_of: self.as_of,
            portfolio_total,
            holdings: self.holdings,
            targets: self.targets,
        })
    }
}
