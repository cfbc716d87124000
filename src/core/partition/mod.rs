//! Result partitioning
//!
//! Splits a processed batch into success and failure groups without losing
//! or duplicating a record, then serializes each non-empty group back to a
//! delimited artifact. For every batch,
//! `ok_group.len() + err_group.len() == batch.len()` and each record lands
//! in exactly one group.

pub mod naming;
pub mod writer;

pub use naming::{derive_output_name, ERROR_SUFFIX, OK_SUFFIX};
pub use writer::{write_group, ERROR_COLUMN};

use crate::domain::{Batch, Outcome, OutcomeKind, ResultGroup};

/// Split a batch into success and failure groups by its outcomes
///
/// Walks the batch in original order; the pairing of record to outcome is
/// positional. The pipeline produces exactly one outcome per record, in
/// submission order.
pub fn partition(batch: &Batch, outcomes: &[Outcome]) -> (ResultGroup, ResultGroup) {
    debug_assert_eq!(
        batch.len(),
        outcomes.len(),
        "one outcome per record, in order"
    );

    let mut ok_group = ResultGroup::new(OutcomeKind::Success);
    let mut err_group = ResultGroup::new(OutcomeKind::Failure);

    for (record, outcome) in batch.records().iter().zip(outcomes) {
        match outcome {
            Outcome::Success => ok_group.push(record.clone(), None),
            Outcome::Failure { reason } => err_group.push(record.clone(), Some(reason.clone())),
        }
    }

    (ok_group, err_group)
}
