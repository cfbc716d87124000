//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Stevedore configuration file.

use crate::config::load_config;
use crate::config::SinkTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Storage Bucket: {}", config.storage.bucket);
        println!("  Pending Prefix: {}", config.storage.pending_prefix);
        println!("  Processed Prefix: {}", config.storage.processed_prefix);
        println!("  Error Prefix: {}", config.storage.error_prefix);
        println!("  Local Pending Dir: {}", config.local.pending_dir);

        match config.sink_target {
            SinkTarget::Postgres => {
                if let Some(ref pg_config) = config.postgres {
                    use secrecy::ExposeSecret;
                    println!("  Sink Target: PostgreSQL");
                    println!(
                        "  PostgreSQL Host: {}",
                        pg_config
                            .connection_string
                            .expose_secret()
                            .as_ref()
                            .split('@')
                            .next_back()
                            .unwrap_or("***")
                    );
                    println!("  Table: {}", pg_config.table);
                }
            }
            SinkTarget::Remote => {
                if let Some(ref remote_config) = config.remote {
                    println!("  Sink Target: Remote Import Service");
                    println!("  Endpoint: {}", remote_config.endpoint);
                    println!("  Username: {}", remote_config.username);
                }
            }
        }

        Ok(0)
    }
}
