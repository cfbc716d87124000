//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "stevedore.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Stevedore configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set sink_target to 'postgres' or 'remote'");
                println!("  3. Create a .env file with your credentials:");
                println!("     - Set STEVEDORE_STORAGE_SECRET_KEY");
                println!("     - Set STEVEDORE_PG_CONNECTION (if using postgres)");
                println!("     - Set STEVEDORE_REMOTE_PASSWORD (if using remote)");
                println!("  4. Validate configuration: stevedore validate-config");
                println!("  5. Process pending files: stevedore run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Stevedore Configuration File
# Staged batch record pipeline

# Sink records are submitted to (postgres or remote)
sink_target = "postgres"

[application]
log_level = "info"

[storage]
bucket = "finance-staging"
region = "eu-west-1"
access_key = "${STEVEDORE_STORAGE_ACCESS_KEY}"
secret_key = "${STEVEDORE_STORAGE_SECRET_KEY}"
# endpoint = "http://localhost:9000"   # S3-compatible stores
# path_style = true
pending_prefix = "inbound/pending/"
processed_prefix = "inbound/processed/"
error_prefix = "inbound/error/"

[local]
pending_dir = "staging/pending"
processed_dir = "staging/processed"
error_dir = "staging/error"

[postgres]
connection_string = "${STEVEDORE_PG_CONNECTION}"
table = "ledger_interface"
connect_timeout_seconds = 30

# [remote]
# endpoint = "https://rates.example.com/import"
# username = "svc_rates"
# password = "${STEVEDORE_REMOTE_PASSWORD}"
# timeout_seconds = 30

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"   # daily | hourly
"#
        .to_string()
    }
}
