//! CLI configuration file.
//!
//! ```toml
//! [engine]
//! target_policy = "clamp"
//! parallel_threshold = 500
//!
//! [[engine.section_layouts]]
//! category = "etf"
//! sections = ["brazil", "usa", "europe"]
//!
//! [output]
//! decimals = 2
//! show_empty = false
//! ```

use carteira_engine::ReportConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "carteira.toml";

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Engine settings passed to every report.
    pub engine: ReportConfig,

    /// Presentation settings.
    pub output: OutputSettings,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimal places for money and percentages in tables.
    pub decimals: u32,

    /// Show categories and sections without holdings.
    pub show_empty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            decimals: 2,
            show_empty: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads the explicit file, else `carteira.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            return Self::from_file(fallback);
        }

        Ok(Self::default())
    }
}
