//! Domain models and types for Stevedore.
//!
//! The domain layer provides:
//! - **Batch data model** ([`Record`], [`Batch`]) - ordered rows with
//!   named, optional text fields plus file provenance
//! - **Outcome model** ([`Outcome`], [`ResultGroup`]) - per-record
//!   submission results as values, never exceptions
//! - **Lifecycle model** ([`StagedFile`], [`Stage`]) - the unit of retry
//! - **Error types** ([`StevedoreError`]) and the [`Result`] alias
//!
//! All fallible operations return [`Result<T>`]; per-record failures are
//! represented as [`Outcome::Failure`] values so partial failure of a
//! batch never aborts it.

pub mod batch;
pub mod errors;
pub mod outcome;
pub mod record;
pub mod result;
pub mod staged_file;

// Re-export commonly used types for convenience
pub use batch::Batch;
pub use errors::StevedoreError;
pub use outcome::{GroupRow, Outcome, OutcomeKind, ResultGroup};
pub use record::Record;
pub use result::Result;
pub use staged_file::{Stage, StagedFile};
