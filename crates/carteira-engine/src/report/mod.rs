//! Full allocation and rebalancing reports.
//!
//! - [`build_report`]: Snapshot in, [`RebalanceReport`] out
//! - [`ReportBuilder`]: Holds a [`crate::types::ReportConfig`] across builds
//! - [`AllocationTable`]: Category-level allocation vs. target bands

mod allocation;
mod builder;
mod model;

pub use allocation::{allocation_row, build_allocation_table, AllocationRow, AllocationTable};
pub use builder::{build_category, build_report, ReportBuilder, UNCLASSIFIED_SECTION};
pub use model::{CategoryReport, PortfolioSummary, RebalanceReport};
