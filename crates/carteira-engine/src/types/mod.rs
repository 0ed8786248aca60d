//! Domain types for allocation reporting.
//!
//! - [`Holding`]: A single investment position
//! - [`Category`]: Top-level asset class with its canonical section order
//! - [`AllocationTarget`]: Portfolio-wide target band per asset class
//! - [`PortfolioSnapshot`]: The complete, immutable engine input
//! - [`ReportConfig`]: Configuration for report computation
//! - [`Diagnostic`]: Non-fatal findings about a snapshot

mod category;
mod config;
mod diagnostics;
mod holding;
mod snapshot;
mod target;

// Re-export all types
pub use category::Category;
pub use config::{ReportConfig, SectionLayout, TargetPolicy};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use holding::{Holding, HoldingBuilder};
pub use snapshot::{PortfolioSnapshot, PortfolioSnapshotBuilder};
pub use target::{AllocationStatus, AllocationTarget};
