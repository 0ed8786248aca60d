//! Non-fatal snapshot diagnostics.
//!
//! Partial or loading data is a normal input state, so the engine never
//! rejects a snapshot. These checks report what the report will clamp,
//! pass through, or bucket as unclassified.

use super::{Category, PortfolioSnapshot, ReportConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Current value below zero; shown as 0.
    NegativeValue {
        /// The stored value.
        value: f64,
    },
    /// Current value NaN or infinite; shown as 0.
    NonFiniteValue,
    /// Negative quantity after commit.
    NegativeQuantity {
        /// The stored quantity.
        quantity: f64,
    },
    /// Per-holding target outside `[0, 100]`.
    TargetOutOfRange {
        /// The stored target.
        target: f64,
    },
    /// Section not part of the category layout; reported as unclassified.
    UnknownSection {
        /// The stored section key.
        section: String,
    },
    /// Another holding already uses this ID.
    DuplicateId,
    /// Target row with `minimum > maximum`.
    InvertedBand {
        /// Category of the row.
        category: Category,
    },
    /// More than one target row for a category; the first one is used.
    DuplicateTarget {
        /// Category of the row.
        category: Category,
    },
}

/// A single finding about a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Holding the finding refers to, if any.
    pub holding_id: Option<String>,

    /// The finding.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    fn holding(id: &str, kind: DiagnosticKind) -> Self {
        Self {
            holding_id: Some(id.to_string()),
            kind,
        }
    }

    fn table(kind: DiagnosticKind) -> Self {
        Self {
            holding_id: None,
            kind,
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue { value } => {
                write!(f, "negative current value {value}, shown as 0")
            }
            Self::NonFiniteValue => write!(f, "current value is not finite, shown as 0"),
            Self::NegativeQuantity { quantity } => write!(f, "negative quantity {quantity}"),
            Self::TargetOutOfRange { target } => write!(f, "target {target}% is outside 0-100"),
            Self::UnknownSection { section } => {
                write!(f, "section '{section}' is not in the category layout")
            }
            Self::DuplicateId => write!(f, "duplicate holding id"),
            Self::InvertedBand { category } => {
                write!(f, "{category} target has minimum above maximum")
            }
            Self::DuplicateTarget { category } => {
                write!(f, "{category} has more than one target row, first one used")
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = &self.holding_id {
            write!(f, "holding '{id}': ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl PortfolioSnapshot {
    /// Checks the snapshot for values the report will not use as stored.
    ///
    /// Holding findings come first, in holding order, followed by target
    /// table findings.
    #[must_use]
    pub fn diagnostics(&self, config: &ReportConfig) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let mut seen_ids = HashSet::new();

        for h in &self.holdings {
            if !seen_ids.insert(h.id.as_str()) {
                out.push(Diagnostic::holding(&h.id, DiagnosticKind::DuplicateId));
            }
            if !h.current_value.is_finite() {
                out.push(Diagnostic::holding(&h.id, DiagnosticKind::NonFiniteValue));
            } else if h.current_value < 0.0 {
                out.push(Diagnostic::holding(
                    &h.id,
                    DiagnosticKind::NegativeValue {
                        value: h.current_value,
                    },
                ));
            }
            if h.quantity < 0.0 {
                out.push(Diagnostic::holding(
                    &h.id,
                    DiagnosticKind::NegativeQuantity {
                        quantity: h.quantity,
                    },
                ));
            }
            if !(0.0..=100.0).contains(&h.target_percent) {
                out.push(Diagnostic::holding(
                    &h.id,
                    DiagnosticKind::TargetOutOfRange {
                        target: h.target_percent,
                    },
                ));
            }
            if !config.sections_for(h.category).contains(&h.section) {
                out.push(Diagnostic::holding(
                    &h.id,
                    DiagnosticKind::UnknownSection {
                        section: h.section.clone(),
                    },
                ));
            }
        }

        let mut seen_targets = HashSet::new();
        for t in &self.targets {
            if !seen_targets.insert(t.category) {
                out.push(Diagnostic::table(DiagnosticKind::DuplicateTarget {
                    category: t.category,
                }));
            }
            if t.minimum > t.maximum {
                out.push(Diagnostic::table(DiagnosticKind::InvertedBand {
                    category: t.category,
                }));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AllocationTarget, Holding};

    fn holding(id: &str, section: &str, value: f64, target: f64) -> Holding {
        Holding::builder()
            .id(id)
            .category(Category::Stock)
            .section(section)
            .current_value(value)
            .target_percent(target)
            .build()
            .unwrap()
    }

    #[test]
    fn test_clean_snapshot() {
        let snapshot = PortfolioSnapshot::builder()
            .add_holding(holding("A", "value", 100.0, 50.0))
            .add_target(AllocationTarget::new(Category::Stock, 30.0).with_band(20.0, 40.0))
            .build()
            .unwrap();
        assert!(snapshot.diagnostics(&ReportConfig::default()).is_empty());
    }

    #[test]
    fn test_holding_findings() {
        let mut bad = holding("A", "dividends", -5.0, 150.0);
        bad.quantity = -1.0;
        let snapshot = PortfolioSnapshot::builder()
            .add_holding(bad)
            .add_holding(holding("A", "value", 1.0, 10.0))
            .build()
            .unwrap();

        let diags = snapshot.diagnostics(&ReportConfig::default());
        let kinds: Vec<_> = diags.iter().map(|d| d.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::NegativeValue { value: -5.0 },
                DiagnosticKind::NegativeQuantity { quantity: -1.0 },
                DiagnosticKind::TargetOutOfRange { target: 150.0 },
                DiagnosticKind::UnknownSection {
                    section: "dividends".into()
                },
                DiagnosticKind::DuplicateId,
            ]
        );
        assert!(diags.iter().all(|d| d.holding_id.as_deref() == Some("A")));
    }

    #[test]
    fn test_layout_override_changes_known_sections() {
        let snapshot = PortfolioSnapshot::builder()
            .add_holding(holding("A", "dividends", 1.0, 0.0))
            .build()
            .unwrap();
        let config = ReportConfig::new().with_section_layout(Category::Stock, ["dividends"]);
        assert!(snapshot.diagnostics(&config).is_empty());
    }

    #[test]
    fn test_target_table_findings() {
        let snapshot = PortfolioSnapshot::builder()
            .add_target(AllocationTarget::new(Category::Etf, 10.0).with_band(15.0, 5.0))
            .add_target(AllocationTarget::new(Category::Etf, 12.0))
            .build()
            .unwrap();
        let diags = snapshot.diagnostics(&ReportConfig::default());
        assert_eq!(diags.len(), 2);
        assert!(diags[0].holding_id.is_none());
        assert_eq!(
            diags[0].kind,
            DiagnosticKind::InvertedBand {
                category: Category::Etf
            }
        );
        assert_eq!(
            diags[1].kind,
            DiagnosticKind::DuplicateTarget {
                category: Category::Etf
            }
        );
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::holding("X", DiagnosticKind::NonFiniteValue);
        assert_eq!(
            d.to_string(),
            "holding 'X': current value is not finite, shown as 0"
        );
    }
}
