//! # Carteira Engine
//!
//! Allocation and rebalancing calculations for multi-asset investment
//! portfolios.
//!
//! Given a snapshot of holdings grouped into asset categories and sections,
//! plus a table of category-level target bands, the engine produces every
//! derived figure a portfolio dashboard shows: category and whole-portfolio
//! shares, gaps to target, contributions needed, section and category
//! totals, and the allocation-vs-target table.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Reports depend only on the snapshot and config
//! - **Never fails on data**: Degenerate denominators yield 0, bad values read as 0
//! - **Deterministic**: Canonical ordering and identical output for identical input
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use carteira_engine::prelude::*;
//!
//! let snapshot = PortfolioSnapshot::builder()
//!     .portfolio_total(100_000.0)
//!     .add_holding(
//!         Holding::builder()
//!             .id("ITSA4")
//!             .category(Category::Stock)
//!             .section("value")
//!             .applied_value(9_000.0)
//!             .current_value(10_000.0)
//!             .target_percent(25.0)
//!             .build()?,
//!     )
//!     .add_target(AllocationTarget::new(Category::Stock, 30.0).with_band(25.0, 35.0))
//!     .build()?;
//!
//! let report = build_report(&snapshot, &ReportConfig::default());
//! let stock = report.category(Category::Stock).unwrap();
//! println!("{}", stock.totals.total_contribution_needed);
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregation`] - Value rollups, shares and gap analysis
//! - [`section`] - Per-holding rows and section totals
//! - [`report`] - Category reports, allocation table and summary
//! - [`types`] - Core types (Holding, Category, Snapshot, Config)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based per-category processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod error;
pub mod report;
pub mod section;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{
    AllocationStatus, AllocationTarget, Category, Diagnostic, DiagnosticKind, Holding,
    HoldingBuilder, PortfolioSnapshot, PortfolioSnapshotBuilder, ReportConfig, SectionLayout,
    TargetPolicy,
};

// Re-export calculation building blocks
pub use aggregation::{gap, return_percent, share, sum, Gap, ValueField};

// Re-export section and report types
pub use report::{
    build_report, AllocationRow, AllocationTable, CategoryReport, PortfolioSummary,
    RebalanceReport, ReportBuilder, UNCLASSIFIED_SECTION,
};
pub use section::{aggregate_section, HoldingRow, SectionReport, Totals};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use carteira_engine::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Inputs
    pub use crate::types::{
        AllocationStatus, AllocationTarget, Category, Holding, HoldingBuilder, PortfolioSnapshot,
        PortfolioSnapshotBuilder,
    };

    // Config
    pub use crate::types::{ReportConfig, TargetPolicy};

    // Diagnostics
    pub use crate::types::{Diagnostic, DiagnosticKind};

    // Reports
    pub use crate::report::{
        build_report, AllocationRow, AllocationTable, CategoryReport, PortfolioSummary,
        RebalanceReport, ReportBuilder,
    };
    pub use crate::section::{HoldingRow, SectionReport, Totals};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = PortfolioError::missing_field("id");
        assert!(err.to_string().contains("id"));
    }
}
