//! Check command implementation.
//!
//! Lists non-fatal data issues. Reports are still computed for such
//! snapshots; `--strict` turns any finding into a failure.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use carteira_engine::Diagnostic;

use crate::cli::OutputFormat;
use crate::commands::load_snapshot;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{print_header, print_json, print_output, print_success, print_warning};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Snapshot file (JSON)
    pub snapshot: PathBuf,

    /// Exit with an error if any issue is found
    #[arg(long)]
    pub strict: bool,
}

/// One printable finding.
#[derive(Debug, Serialize, Tabled)]
pub struct DiagnosticLine {
    #[tabled(rename = "Holding")]
    pub holding: String,
    #[tabled(rename = "Issue")]
    pub issue: String,
}

impl From<&Diagnostic> for DiagnosticLine {
    fn from(d: &Diagnostic) -> Self {
        Self {
            holding: d.holding_id.clone().unwrap_or_else(|| "-".to_string()),
            issue: d.kind.to_string(),
        }
    }
}

/// Execute the check command.
pub fn execute(args: CheckArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let diagnostics = snapshot.diagnostics(&config.engine);

    match format {
        OutputFormat::Table => {
            if diagnostics.is_empty() {
                print_success(&format!(
                    "{} holdings checked, no issues found",
                    snapshot.holding_count()
                ));
            } else {
                print_header("Snapshot Issues");
                let lines: Vec<DiagnosticLine> = diagnostics.iter().map(Into::into).collect();
                print_output(&lines, format)?;
            }
        }
        OutputFormat::Json => print_json(&diagnostics)?,
        OutputFormat::Csv => {
            let lines: Vec<DiagnosticLine> = diagnostics.iter().map(Into::into).collect();
            print_output(&lines, format)?;
        }
    }

    if !diagnostics.is_empty() {
        if args.strict {
            return Err(CliError::IssuesFound(diagnostics.len()).into());
        }
        print_warning(&format!("{} issue(s) found", diagnostics.len()));
    }

    Ok(())
}
