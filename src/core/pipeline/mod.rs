//! Pipeline orchestration

pub mod runner;
pub mod summary;

pub use runner::{Pipeline, SinkFactory};
pub use summary::{FileError, RunSummary};
