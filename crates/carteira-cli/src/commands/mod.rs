//! CLI command implementations.

pub mod allocation;
pub mod check;
pub mod report;

// Re-export submodules for convenience
pub use allocation::AllocationArgs;
pub use check::CheckArgs;
pub use report::ReportArgs;

use carteira_engine::PortfolioSnapshot;
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Reads a JSON snapshot file.
pub fn load_snapshot(path: &Path) -> CliResult<PortfolioSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = PortfolioSnapshot::from_json(&content).map_err(|source| CliError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded {} holdings and {} targets from {}",
        snapshot.holding_count(),
        snapshot.targets.len(),
        path.display()
    );
    Ok(snapshot)
}
