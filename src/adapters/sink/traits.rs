//! Record sink abstraction
//!
//! A sink is the external system each record is submitted to. The two
//! implementations (transactional PostgreSQL insert, remote HTTP import)
//! have different transaction and protocol semantics but share this one
//! contract, selected at construction time by the factory rather than by
//! runtime type inspection.

use crate::domain::{Outcome, Record, Result};
use async_trait::async_trait;

/// Feed shape a sink expects from its staged files
///
/// The parser and partitioner read this instead of special-casing a sink
/// variant: the delimiter drives parsing and artifact writing, and the
/// required columns drive header validation.
#[derive(Debug, Clone, Copy)]
pub struct FeedProfile {
    /// Field delimiter of the staged files for this sink
    pub delimiter: u8,
    /// Columns that must be present in the header row
    pub required_columns: &'static [&'static str],
}

/// Capability contract every sink variant implements
///
/// Lifecycle per file: `open` once, `submit` once per record in batch
/// order, `commit` once. A sink instance is scoped to a single file and
/// never reused.
#[async_trait]
pub trait RecordSink: Send {
    /// Short variant name for logging
    fn name(&self) -> &'static str;

    /// The feed shape this sink consumes
    fn profile(&self) -> FeedProfile;

    /// Establish the connection/transaction scope for one batch
    ///
    /// # Errors
    ///
    /// Returns [`StevedoreError::Connectivity`](crate::domain::StevedoreError)
    /// if the sink cannot be reached; the file stays pending for retry.
    async fn open(&mut self) -> Result<()>;

    /// Submit one record
    ///
    /// Record-level rejections come back as `Ok(Outcome::Failure)` so the
    /// caller can process every record in the batch unconditionally; `Err`
    /// is reserved for a lost connection, which aborts the whole file.
    /// Any side effect of the record is not observable before this call
    /// returns.
    async fn submit(&mut self, record: &Record) -> Result<Outcome>;

    /// Close the batch scope
    ///
    /// For the transactional variant this is the single `COMMIT` that
    /// durably persists every record whose statement succeeded, even if
    /// other records in the batch failed. For the remote variant it is a
    /// no-op.
    async fn commit(&mut self) -> Result<()>;
}
