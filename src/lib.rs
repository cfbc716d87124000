// Stevedore - Staged Batch Record Pipeline
// Copyright (c) 2025 Stevedore Contributors
// Licensed under the MIT License

//! # Stevedore - Staged Batch Record Pipeline
//!
//! Stevedore moves delimited batch files from a remote staging store into a
//! record sink, one record at a time, and reports per-record results as
//! `_ok` and `_error` artifacts next to the originals.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** pending files from a remote object store
//! - **Parsing** delimited batches with encoding detection
//! - **Submitting** each record to a pluggable sink (PostgreSQL or a
//!   remote import service) with per-record fault isolation
//! - **Partitioning** outcomes into success and failure artifacts
//! - **Finalizing** the staging lifecycle with at-least-once semantics
//!
//! ## Architecture
//!
//! Stevedore follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (source, partition, staging, pipeline)
//! - [`adapters`] - External integrations (object store, sinks)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and message sanitization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stevedore::config::load_config;
//! use stevedore::core::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("stevedore.toml")?;
//!
//!     let pipeline = Pipeline::from_config(&config)?;
//!     let summary = pipeline.run().await?;
//!
//!     println!(
//!         "{} of {} files completed",
//!         summary.files_completed, summary.files_found
//!     );
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
