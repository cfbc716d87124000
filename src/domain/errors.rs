//! Domain error types
//!
//! One error hierarchy for the whole pipeline. Every variant carries a
//! sanitized `String` payload so third-party driver/SDK types never cross
//! the domain boundary, and so messages are safe to log as-is.
//!
//! Per-record submission failures are *not* errors: they are
//! [`Outcome::Failure`](crate::domain::Outcome) values recorded in the
//! failure group. The variants here are reserved for conditions that abort
//! a single file (schema, connectivity, staging, local I/O) or the whole
//! run (configuration, listing the pending prefix).

use thiserror::Error;

/// Main Stevedore error type
#[derive(Debug, Error)]
pub enum StevedoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required columns missing from a parsed header
    ///
    /// Aborts the file before any sink call is made; the file stays in
    /// pending for the next run.
    #[error("Schema error: missing required column(s): {}", missing.join(", "))]
    Schema {
        /// Missing column names, sorted for stable reporting
        missing: Vec<String>,
    },

    /// The staged file could not be decoded or parsed as delimited text
    #[error("Source error: {0}")]
    Source(String),

    /// Sink connection could not be established or was lost mid-batch
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Remote object store operation (list/download/upload/delete) failed
    #[error("Staging error: {0}")]
    Staging(String),

    /// Local filesystem operation failed
    #[error("Local I/O error: {0}")]
    LocalIo(String),
}

impl StevedoreError {
    /// Build a schema error from an unordered set of missing column names
    ///
    /// Names are sorted so the same defect always produces the same
    /// message, which matters for operators diffing run logs.
    pub fn missing_columns<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut missing: Vec<String> = missing.into_iter().map(Into::into).collect();
        missing.sort();
        StevedoreError::Schema { missing }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for StevedoreError {
    fn from(err: std::io::Error) -> Self {
        StevedoreError::LocalIo(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for StevedoreError {
    fn from(err: toml::de::Error) -> Self {
        StevedoreError::Configuration(format!("TOML parse error: {err}"))
    }
}
