// Stevedore - Staged Batch Record Pipeline
// Copyright (c) 2025 Stevedore Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use stevedore::cli::{Cli, Commands};
use stevedore::config::{load_config, LoggingConfig};
use stevedore::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // The config file carries the logging section; if it does not load
    // here the command will surface the real error itself
    let (config_log_level, logging_config) = match load_config(&cli.config) {
        Ok(config) => (config.application.log_level.clone(), config.logging),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.as_deref().unwrap_or(&config_log_level);

    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    // Correlates every log line of this invocation
    let run_id = format!("{:x}", run_nanos());
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        run_id = %run_id,
        "Stevedore - Staged Batch Record Pipeline"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

fn run_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
