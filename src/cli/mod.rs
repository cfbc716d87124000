//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Stevedore using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Stevedore - Staged Batch Record Pipeline
#[derive(Parser, Debug)]
#[command(name = "stevedore")]
#[command(version, about, long_about = None)]
#[command(author = "Stevedore Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "stevedore.toml", env = "STEVEDORE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "STEVEDORE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process everything under the remote pending prefix
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
