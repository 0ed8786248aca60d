//! Value rollups over holdings.

use crate::types::Holding;
use serde::{Deserialize, Serialize};

/// Summable field of a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    /// Units held
    Quantity,
    /// Cost basis
    AppliedValue,
    /// Display-safe current value (negative and non-finite read as 0)
    CurrentValue,
}

impl ValueField {
    /// Reads this field from a holding, with non-finite values as 0.
    #[must_use]
    pub fn read(&self, holding: &Holding) -> f64 {
        match self {
            Self::Quantity => finite_or_zero(holding.quantity),
            Self::AppliedValue => finite_or_zero(holding.applied_value),
            Self::CurrentValue => holding.display_value(),
        }
    }
}

/// Maps NaN and infinities to 0.
#[inline]
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sums a field over holdings.
///
/// Plain left-to-right summation; an empty collection yields 0.
#[must_use]
pub fn sum<'a, I>(holdings: I, field: ValueField) -> f64
where
    I: IntoIterator<Item = &'a Holding>,
{
    holdings.into_iter().fold(0.0, |acc, h| acc + field.read(h))
}

/// Arithmetic mean of a sequence, or 0 when empty.
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(t, n), v| (t + v, n + 1));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
