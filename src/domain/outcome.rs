//! Per-record outcomes and result groups
//!
//! Submission results are values, not exceptions: every `submit` call
//! yields an [`Outcome`], and the partitioner turns a batch plus its
//! outcomes into two [`ResultGroup`]s without losing or duplicating a
//! record.

use crate::domain::Record;

/// Result of submitting one record to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record was accepted by the sink
    Success,
    /// The record was rejected; the reason is a sanitized, human-readable
    /// string destined for the `ERROR` column of the failure artifact
    Failure {
        /// Why the sink rejected the record
        reason: String,
    },
}

impl Outcome {
    /// Build a failure outcome
    pub fn failure(reason: impl Into<String>) -> Self {
        Outcome::Failure {
            reason: reason.into(),
        }
    }

    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Which outcome kind a result group holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Records the sink accepted
    Success,
    /// Records the sink rejected
    Failure,
}

/// One row of a result group: the record plus its failure reason, if any
#[derive(Debug, Clone)]
pub struct GroupRow {
    /// The record, unchanged from the batch
    pub record: Record,
    /// Failure reason; always `None` in the success group
    pub reason: Option<String>,
}

/// Ordered records sharing an outcome kind
///
/// Two groups are produced per batch; either may be empty, and an empty
/// group produces no output artifact at all.
#[derive(Debug, Clone)]
pub struct ResultGroup {
    kind: OutcomeKind,
    rows: Vec<GroupRow>,
}

impl ResultGroup {
    /// Create an empty group of the given kind
    pub fn new(kind: OutcomeKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    /// Append a record, preserving batch order
    pub fn push(&mut self, record: Record, reason: Option<String>) {
        self.rows.push(GroupRow { record, reason });
    }

    /// The outcome kind shared by every row
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Rows in original batch order
    pub fn rows(&self) -> &[GroupRow] {
        &self.rows
    }

    /// Number of records in the group
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the group holds no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
