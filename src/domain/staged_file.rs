//! Staged file identity and lifecycle stage
//!
//! A [`StagedFile`] is the unit of retry: its identity (the filename)
//! persists across the whole remote-pending → terminal lifecycle, while
//! batches and result groups live only for one processing pass.

use std::path::{Path, PathBuf};

/// Lifecycle stage of a staged file
///
/// Invariants: a file is never in two terminal local directories at once,
/// and the remote pending object is deleted only after the result
/// artifacts are durably uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Object exists under the remote pending prefix
    RemotePending,
    /// Downloaded into the local pending directory
    LocalPending,
    /// Batch is being parsed/submitted; no persisted state change
    Processing,
    /// `_ok` artifact written locally
    LocalProcessed,
    /// `_error` artifact written locally
    LocalError,
    /// `_ok` artifact uploaded to the remote processed prefix
    RemoteProcessed,
    /// `_error` artifact uploaded to the remote error prefix
    RemoteError,
}

/// One file moving through the staging lifecycle
#[derive(Debug, Clone)]
pub struct StagedFile {
    file_name: String,
    remote_key: String,
    local_path: PathBuf,
    stage: Stage,
}

impl StagedFile {
    /// Track a file discovered under the remote pending prefix
    pub fn remote_pending(file_name: impl Into<String>, remote_key: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            remote_key: remote_key.into(),
            local_path: PathBuf::new(),
            stage: Stage::RemotePending,
        }
    }

    /// Record the local download location and advance to `LocalPending`
    pub fn downloaded_to(&mut self, local_path: PathBuf) {
        self.local_path = local_path;
        self.stage = Stage::LocalPending;
    }

    /// Advance to a new lifecycle stage
    pub fn advance(&mut self, stage: Stage) {
        tracing::debug!(
            file = %self.file_name,
            from = ?self.stage,
            to = ?stage,
            "Stage transition"
        );
        self.stage = stage;
    }

    /// Filename, the identity of the staged file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full object key under the remote pending prefix
    pub fn remote_key(&self) -> &str {
        &self.remote_key
    }

    /// Path of the local pending copy
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Current lifecycle stage
    pub fn stage(&self) -> Stage {
        self.stage
    }
}
