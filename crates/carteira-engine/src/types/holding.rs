//! Holding representation.

use super::Category;
use crate::aggregation::{finite_or_zero, return_percent};
use crate::error::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};

/// A single investment position.
///
/// Holdings are inputs: the engine reads them and never modifies them.
/// Derived figures (shares, gaps, contributions) live on the report rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique, stable identifier for this position.
    pub id: String,

    /// Display name or ticker.
    #[serde(default)]
    pub name: String,

    /// Top-level asset class.
    pub category: Category,

    /// Sub-bucket inside the category (e.g. "value", "post_fixed").
    pub section: String,

    /// Units held. Fractional for crypto and funds.
    #[serde(default)]
    pub quantity: f64,

    /// Average acquisition price per unit.
    #[serde(default)]
    pub acquisition_price: f64,

    /// Latest price per unit.
    #[serde(default)]
    pub current_price: f64,

    /// Cost basis (or entries-derived value for fixed income and funds).
    #[serde(default)]
    pub applied_value: f64,

    /// Mark-to-market value.
    #[serde(default)]
    pub current_value: f64,

    /// User target as a percentage of the category (0-100).
    #[serde(default)]
    pub target_percent: f64,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the current value clamped for display derivations.
    ///
    /// Negative and non-finite values map to 0. The stored field is untouched.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        let value = finite_or_zero(self.current_value);
        if value < 0.0 {
            0.0
        } else {
            value
        }
    }

    /// Returns true if the current value needed clamping.
    #[must_use]
    pub fn is_value_clamped(&self) -> bool {
        !self.current_value.is_finite() || self.current_value < 0.0
    }

    /// Returns the return on cost as a percentage.
    ///
    /// `(current - applied) / applied * 100`, or 0 when nothing was applied.
    #[must_use]
    pub fn return_percent(&self) -> f64 {
        return_percent(self.display_value(), finite_or_zero(self.applied_value))
    }

    /// Returns the unrealized gain in currency units.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.display_value() - finite_or_zero(self.applied_value)
    }
}

/// Builder for constructing a [`Holding`].
///
/// Applied and current values default to `quantity * price` when not set.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    id: Option<String>,
    name: Option<String>,
    category: Option<Category>,
    section: Option<String>,
    quantity: f64,
    acquisition_price: f64,
    current_price: f64,
    applied_value: Option<f64>,
    current_value: Option<f64>,
    target_percent: f64,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holding ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the section key.
    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the acquisition price per unit.
    #[must_use]
    pub fn acquisition_price(mut self, price: f64) -> Self {
        self.acquisition_price = price;
        self
    }

    /// Sets the current price per unit.
    #[must_use]
    pub fn current_price(mut self, price: f64) -> Self {
        self.current_price = price;
        self
    }

    /// Sets the applied value explicitly.
    #[must_use]
    pub fn applied_value(mut self, value: f64) -> Self {
        self.applied_value = Some(value);
        self
    }

    /// Sets the current value explicitly.
    #[must_use]
    pub fn current_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Sets the target percentage within the category.
    #[must_use]
    pub fn target_percent(mut self, target: f64) -> Self {
        self.target_percent = target;
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if `id`, `category` or `section` is missing, or if a
    /// numeric input is NaN.
    pub fn build(self) -> PortfolioResult<Holding> {
        let id = self.id.ok_or_else(|| PortfolioError::missing_field("id"))?;
        let category = self
            .category
            .ok_or_else(|| PortfolioError::missing_field("category"))?;
        let section = self
            .section
            .ok_or_else(|| PortfolioError::missing_field("section"))?;

        for (field, value) in [
            ("quantity", self.quantity),
            ("acquisition_price", self.acquisition_price),
            ("current_price", self.current_price),
            ("target_percent", self.target_percent),
        ] {
            if value.is_nan() {
                return Err(PortfolioError::invalid_holding(
                    &id,
                    format!("{field} is NaN"),
                ));
            }
        }

        let applied_value = self
            .applied_value
            .unwrap_or(self.quantity * self.acquisition_price);
        let current_value = self
            .current_value
            .unwrap_or(self.quantity * self.current_price);

        Ok(Holding {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            category,
            section,
            quantity: self.quantity,
            acquisition_price: self.acquisition_price,
            current_price: self.current_price,
            applied_value,
            current_value,
            target_percent: self.target_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stock(id: &str) -> HoldingBuilder {
        Holding::builder()
            .id(id)
            .category(Category::Stock)
            .section("value")
    }

    #[test]
    fn test_derives_values_from_quantity() {
        let h = stock("ITSA4")
            .quantity(100.0)
            .acquisition_price(8.0)
            .current_price(10.0)
            .build()
            .unwrap();

        assert_relative_eq!(h.applied_value, 800.0);
        assert_relative_eq!(h.current_value, 1000.0);
        assert_relative_eq!(h.return_percent(), 25.0);
        assert_relative_eq!(h.gain(), 200.0);
        assert_eq!(h.name, "ITSA4");
    }

    #[test]
    fn test_explicit_values_win() {
        let h = stock("CDB-2027")
            .quantity(1.0)
            .current_price(10.0)
            .applied_value(5_000.0)
            .current_value(5_400.0)
            .build()
            .unwrap();

        assert_relative_eq!(h.current_value, 5_400.0);
        assert_relative_eq!(h.return_percent(), 8.0);
    }

    #[test]
    fn test_missing_fields() {
        let err = Holding::builder().category(Category::Stock).build();
        assert!(err.unwrap_err().to_string().contains("id"));

        let err = Holding::builder().id("X").section("value").build();
        assert!(err.unwrap_err().to_string().contains("category"));

        let err = Holding::builder().id("X").category(Category::Etf).build();
        assert!(err.unwrap_err().to_string().contains("section"));
    }

    #[test]
    fn test_nan_rejected_by_builder() {
        let err = stock("BAD").quantity(f64::NAN).build().unwrap_err();
        assert!(err.to_string().contains("quantity is NaN"));
    }

    #[test]
    fn test_display_value_clamps() {
        let mut h = stock("NEG").current_value(-50.0).build().unwrap();
        assert_eq!(h.display_value(), 0.0);
        assert!(h.is_value_clamped());
        assert_eq!(h.current_value, -50.0);

        h.current_value = f64::NAN;
        assert_eq!(h.display_value(), 0.0);
        assert!(h.is_value_clamped());

        h.current_value = 12.5;
        assert_eq!(h.display_value(), 12.5);
        assert!(!h.is_value_clamped());
    }

    #[test]
    fn test_return_without_cost_basis() {
        let h = stock("GIFT").current_value(100.0).build().unwrap();
        assert_eq!(h.return_percent(), 0.0);
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{"id":"BTC","category":"crypto","section":"bitcoin","current_value":250.0}"#;
        let h: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(h.category, Category::Crypto);
        assert_eq!(h.quantity, 0.0);
        assert_eq!(h.target_percent, 0.0);
        assert_eq!(h.name, "");
    }
}
