//! Run command implementation
//!
//! This module implements the `run` command: one full pass over every file
//! currently staged under the remote pending prefix.

use crate::config::load_config;
use crate::core::pipeline::Pipeline;
use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting run command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Configuration is invalid");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let pipeline = Pipeline::from_config(&config)?;
        let summary = pipeline.run().await?;

        println!(
            "Processed {}/{} files ({} records ok, {} records failed) in {:.1}s",
            summary.files_completed,
            summary.files_found,
            summary.records_succeeded,
            summary.records_failed,
            summary.duration.as_secs_f64()
        );

        if summary.is_clean() {
            Ok(0)
        } else {
            for file_error in &summary.errors {
                eprintln!("  {}: {}", file_error.file_name, file_error.error);
            }
            Ok(1) // Some files left pending for retry
        }
    }
}
