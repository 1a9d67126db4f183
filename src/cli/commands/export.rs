//! Export command implementation
//!
//! This module implements the `export` command, which drives one export
//! dialog session from the command line.

use crate::adapters::notify::ConsoleNotifier;
use crate::config::load_config_or_default;
use crate::core::export::ExportCoordinator;
use crate::core::render::ExportFormat;
use crate::core::session::{ExportDialog, ExportOutcome, HomePage};
use crate::domain::{parse_date, FieldSelection, RegistryError, SourceError};
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// First day of the range (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the range (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Fields to include, by label or key (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Output format (xlsx or pdf)
    #[arg(long, default_value = "xlsx")]
    pub format: String,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(directory = %dir, "Overriding output directory from CLI");
            config.output.directory = dir.clone();
        }

        let format: ExportFormat = match self.format.parse() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let from = match self.from.as_deref().map(parse_date).transpose() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let to = match self.to.as_deref().map(parse_date).transpose() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let selection = match FieldSelection::from_names(&self.fields) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        let page = HomePage::new(ExportDialog::new(
            Arc::new(coordinator),
            Arc::new(ConsoleNotifier),
        ));
        let dialog = page.open_export();
        dialog.set_from(from);
        dialog.set_to(to);
        dialog.set_selection(selection);

        println!("🚀 Exporting registrations as {format}...");
        let outcome = dialog.request_export(format).await;

        if let ExportOutcome::Delivered(receipt) = &outcome {
            println!();
            println!("📊 Export Summary:");
            println!("  Format: {}", receipt.format);
            println!("  Records: {}", receipt.records);
            println!("  File: {}", receipt.path.display());
            println!("  Duration: {:.2}s", receipt.duration.as_secs_f64());
        }

        Ok(exit_code(&outcome))
    }
}

/// Process exit code for an export outcome
pub fn exit_code(outcome: &ExportOutcome) -> i32 {
    match outcome {
        ExportOutcome::Delivered(_) => 0,
        ExportOutcome::Rejected(_) => 2,
        ExportOutcome::Failed(RegistryError::Source(SourceError::ConnectionFailed(_))) => 4,
        ExportOutcome::Failed(RegistryError::Configuration(_)) => 2,
        ExportOutcome::Failed(_) | ExportOutcome::Discarded => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportReceipt;
    use crate::domain::ValidationError;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_exit_code_delivered() {
        let outcome = ExportOutcome::Delivered(ExportReceipt {
            format: ExportFormat::Document,
            path: PathBuf::from("registrations.pdf"),
            records: 2,
            duration: Duration::from_millis(10),
        });
        assert_eq!(exit_code(&outcome), 0);
    }

    #[test]
    fn test_exit_code_rejected() {
        let outcome = ExportOutcome::Rejected(ValidationError::MissingDateRange.into());
        assert_eq!(exit_code(&outcome), 2);
    }

    #[test]
    fn test_exit_code_connection_failure() {
        let outcome = ExportOutcome::Failed(
            SourceError::ConnectionFailed("connection refused".to_string()).into(),
        );
        assert_eq!(exit_code(&outcome), 4);
    }

    #[test]
    fn test_exit_code_empty_results() {
        let outcome =
            ExportOutcome::Failed(SourceError::EmptyResults("Empty Registrations".into()).into());
        assert_eq!(exit_code(&outcome), 1);
    }
}
