//! Gap to target and contribution needed.

use serde::{Deserialize, Serialize};

/// Distance between a current share and its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// `target - current`, in percentage points.
    /// Positive means under-allocated (buy), negative over-allocated.
    pub gap_percent: f64,

    /// Amount to invest to close a positive gap. Never negative: an
    /// over-allocated position reports its gap but no sale amount.
    pub contribution_needed: f64,
}

impl Gap {
    /// Returns true if the position is under its target.
    #[must_use]
    pub fn is_under_target(&self) -> bool {
        self.gap_percent > 0.0
    }

    /// Returns true if the position is over its target.
    #[must_use]
    pub fn is_over_target(&self) -> bool {
        self.gap_percent < 0.0
    }
}

/// Compares a current share against a target.
///
/// `base_total` is the amount the percentages refer to. Per-holding rows
/// pass their category total; the portfolio-wide allocation table passes
/// the whole-portfolio total. A non-positive base yields no contribution.
#[must_use]
pub fn gap(current_share_percent: f64, target_percent: f64, base_total: f64) -> Gap {
    let gap_percent = target_percent - current_share_percent;
    let contribution_needed = if gap_percent > 0.0 && base_total > 0.0 && base_total.is_finite() {
        (gap_percent / 100.0) * base_total
    } else {
        0.0
    };

    Gap {
        gap_percent,
        contribution_needed,
    }
}
