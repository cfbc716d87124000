//! Result group artifact writer
//!
//! Serializes a non-empty result group back to a delimited file using the
//! batch's detected encoding and source delimiter. The failure artifact
//! carries one extra trailing `ERROR` column holding the sanitized reason.
//! An empty group produces no file: absence of an artifact is the signal,
//! never an empty file.

use crate::core::partition::naming::derive_output_name;
use crate::core::source::encoding::encode;
use crate::domain::{Batch, OutcomeKind, Result, ResultGroup, StevedoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Header name of the appended reason column on failure artifacts
pub const ERROR_COLUMN: &str = "ERROR";

/// Write a result group as a delimited artifact
///
/// The header row lists the batch's full display column order, plus
/// `ERROR` for a failure group. Rows keep original batch order; absent
/// values are written as empty fields.
///
/// Returns `Ok(None)` without touching the filesystem when the group is
/// empty.
///
/// # Errors
///
/// Returns [`StevedoreError::LocalIo`] if the directory cannot be created
/// or the artifact cannot be written.
pub fn write_group(
    group: &ResultGroup,
    batch: &Batch,
    dir: &Path,
    suffix: &str,
) -> Result<Option<PathBuf>> {
    if group.is_empty() {
        return Ok(None);
    }

    fs::create_dir_all(dir)?;

    let with_reason = group.kind() == OutcomeKind::Failure;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(batch.delimiter())
        .from_writer(Vec::new());

    let mut header: Vec<&str> = batch.columns().iter().map(String::as_str).collect();
    if with_reason {
        header.push(ERROR_COLUMN);
    }
    writer
        .write_record(&header)
        .map_err(|e| StevedoreError::LocalIo(format!("failed to write artifact header: {e}")))?;

    for row in group.rows() {
        let mut fields: Vec<&str> = row.record.values().map(|v| v.unwrap_or("")).collect();
        if with_reason {
            fields.push(row.reason.as_deref().unwrap_or(""));
        }
        writer
            .write_record(&fields)
            .map_err(|e| StevedoreError::LocalIo(format!("failed to write artifact row: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StevedoreError::LocalIo(format!("failed to flush artifact: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| StevedoreError::LocalIo(format!("artifact is not valid UTF-8: {e}")))?;

    let name = derive_output_name(batch.file_name(), suffix);
    let path = dir.join(&name);
    fs::write(&path, encode(&text, batch.encoding()))?;

    tracing::info!(
        artifact = %name,
        records = group.len(),
        encoding = batch.encoding().name(),
        "Wrote result artifact"
    );

    Ok(Some(path))
}
