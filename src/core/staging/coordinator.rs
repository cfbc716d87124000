//! Staging lifecycle coordinator
//!
//! Drives files through remote-pending → local-pending → terminal stages.
//! The ordering invariant lives here: result artifacts are uploaded before
//! the original pending object is deleted, so a crash at any point leaves
//! the file either fully finalized or still pending for the next run.
//! At-least-once, never lost.

use crate::adapters::store::ObjectStore;
use crate::config::{LocalConfig, StorageConfig};
use crate::domain::{Result, StagedFile, StevedoreError};
use crate::logging::sanitize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which terminal prefix an artifact belongs under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `_ok` artifact, goes under the processed prefix
    Processed,
    /// `_error` artifact, goes under the error prefix
    Error,
}

/// Coordinates file movement between the remote store and local staging
pub struct StagingCoordinator {
    store: Arc<dyn ObjectStore>,
    storage: StorageConfig,
    local: LocalConfig,
}

impl StagingCoordinator {
    pub fn new(store: Arc<dyn ObjectStore>, storage: StorageConfig, local: LocalConfig) -> Self {
        Self {
            store,
            storage,
            local,
        }
    }

    /// List and download everything under the remote pending prefix
    ///
    /// A listing failure is fatal for the run; a single file failing to
    /// download is logged and skipped, leaving it pending for the next
    /// run.
    ///
    /// # Errors
    ///
    /// Returns [`StevedoreError::Staging`] if the listing fails or the
    /// local pending directory cannot be created.
    pub async fn fetch_pending(&self) -> Result<Vec<StagedFile>> {
        let keys = self.store.list(&self.storage.pending_prefix).await?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let pending_dir = Path::new(&self.local.pending_dir);
        std::fs::create_dir_all(pending_dir)?;

        let mut files = Vec::with_capacity(keys.len());
        for key in keys {
            let file_name = match safe_file_name(&key, &self.storage.pending_prefix) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping unsafe pending key");
                    continue;
                }
            };

            let body = match self.store.get(&key).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Download failed, file stays pending");
                    continue;
                }
            };

            let local_path = pending_dir.join(&file_name);
            if let Err(e) = std::fs::write(&local_path, &body) {
                tracing::warn!(key = %key, error = %e, "Local write failed, file stays pending");
                continue;
            }

            let mut staged = StagedFile::remote_pending(file_name, key);
            staged.downloaded_to(local_path);
            files.push(staged);
        }

        tracing::info!(count = files.len(), "Fetched pending files");
        Ok(files)
    }

    /// Upload a local result artifact under its terminal prefix
    pub async fn upload_artifact(&self, local_path: &Path, kind: ArtifactKind) -> Result<()> {
        let file_name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StevedoreError::Staging(sanitize(&format!(
                    "artifact path has no valid file name: {}",
                    local_path.display()
                )))
            })?;

        let prefix = match kind {
            ArtifactKind::Processed => &self.storage.processed_prefix,
            ArtifactKind::Error => &self.storage.error_prefix,
        };
        let key = format!("{prefix}{file_name}");

        let body = std::fs::read(local_path)?;
        self.store.put(&key, body).await
    }

    /// Remove the original pending object, then the local pending copy
    ///
    /// Called only after every artifact for the file is uploaded. Deleting
    /// remote first means a crash between the two deletes leaves a stray
    /// local copy, never a reprocessable remote object with missing
    /// artifacts.
    pub async fn finalize(&self, staged: &StagedFile) -> Result<()> {
        self.store.delete(staged.remote_key()).await?;
        std::fs::remove_file(staged.local_path())?;
        Ok(())
    }

    /// Local directory for `_ok` artifacts
    pub fn processed_dir(&self) -> &Path {
        Path::new(&self.local.processed_dir)
    }

    /// Local directory for `_error` artifacts
    pub fn error_dir(&self) -> &Path {
        Path::new(&self.local.error_dir)
    }
}

/// Extract the bare file name from a pending key, rejecting anything that
/// could escape the local pending directory
fn safe_file_name(key: &str, prefix: &str) -> Result<String> {
    let relative = key.strip_prefix(prefix).unwrap_or(key);

    if relative.is_empty() {
        return Err(StevedoreError::Staging(format!(
            "pending key has no file name: {key}"
        )));
    }
    if relative.contains("..") || relative.contains('/') || relative.contains('\\') {
        return Err(StevedoreError::Staging(format!(
            "pending key is not a plain file name: {key}"
        )));
    }

    Ok(relative.to_string())
}
