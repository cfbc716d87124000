//! Core pipeline logic
//!
//! Parsing, partitioning, staging lifecycle, and run orchestration. This
//! layer depends on the adapter traits only, never on a concrete driver.

pub mod partition;
pub mod pipeline;
pub mod source;
pub mod staging;
