//! Pipeline runner
//!
//! Single-pass, single-threaded orchestration: fetch pending files, then
//! for each file parse, submit every record sequentially, partition the
//! outcomes, write and upload both artifacts, and only then delete the
//! original pending object. A failure anywhere before finalization leaves
//! the file pending for the next run.

use crate::adapters::sink::{create_sink, RecordSink};
use crate::adapters::store::{ObjectStore, S3ObjectStore};
use crate::config::StevedoreConfig;
use crate::core::partition::{partition, write_group, ERROR_SUFFIX, OK_SUFFIX};
use crate::core::pipeline::summary::{FileError, RunSummary};
use crate::core::source::parse;
use crate::core::staging::{ArtifactKind, StagingCoordinator};
use crate::domain::{Result, Stage, StagedFile};
use std::sync::Arc;
use std::time::Instant;

/// Produces a fresh sink per file
pub type SinkFactory = Box<dyn Fn() -> Result<Box<dyn RecordSink>> + Send + Sync>;

/// The batch record pipeline
pub struct Pipeline {
    staging: StagingCoordinator,
    sink_factory: SinkFactory,
}

impl Pipeline {
    /// Wire the pipeline from configuration
    pub fn from_config(config: &StevedoreConfig) -> Result<Self> {
        let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(&config.storage));
        let staging =
            StagingCoordinator::new(store, config.storage.clone(), config.local.clone());

        let factory_config = config.clone();
        let sink_factory: SinkFactory = Box::new(move || create_sink(&factory_config));

        // Fail on a broken sink section now, not on the first file
        create_sink(config)?;

        Ok(Self {
            staging,
            sink_factory,
        })
    }

    /// Wire the pipeline from explicit parts
    pub fn new(staging: StagingCoordinator, sink_factory: SinkFactory) -> Self {
        Self {
            staging,
            sink_factory,
        }
    }

    /// Execute one full run over everything currently pending
    ///
    /// # Errors
    ///
    /// Returns an error only for run-level failures (the pending listing
    /// itself). Per-file failures are recorded in the summary and leave
    /// their files pending.
    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::default();

        let mut files = self.staging.fetch_pending().await?;
        summary.files_found = files.len();

        if files.is_empty() {
            tracing::info!("No pending files, nothing to do");
            summary.duration = started.elapsed();
            return Ok(summary);
        }

        for staged in &mut files {
            let file_name = staged.file_name().to_string();
            tracing::info!(file = %file_name, "Processing file");

            match self.process_file(staged).await {
                Ok((succeeded, failed)) => {
                    summary.files_completed += 1;
                    summary.records_succeeded += succeeded;
                    summary.records_failed += failed;
                }
                Err(e) => {
                    summary.files_failed += 1;
                    summary.errors.push(FileError {
                        file_name: file_name.clone(),
                        error: e.to_string(),
                    });
                    tracing::warn!(file = %file_name, error = %e, "File failed, left pending");
                }
            }
        }

        summary.duration = started.elapsed();
        summary.log_summary();
        Ok(summary)
    }

    /// Drive one file through its full lifecycle
    ///
    /// Returns the per-record success and failure counts. Any error return
    /// happens before the original pending object is deleted.
    async fn process_file(&self, staged: &mut StagedFile) -> Result<(usize, usize)> {
        let mut sink = (self.sink_factory)()?;
        let profile = sink.profile();

        staged.advance(Stage::Processing);
        let batch = parse(staged.local_path(), profile.delimiter, profile.required_columns)?;

        sink.open().await?;
        let mut outcomes = Vec::with_capacity(batch.len());
        for record in batch.records() {
            outcomes.push(sink.submit(record).await?);
        }
        sink.commit().await?;

        let (ok_group, err_group) = partition(&batch, &outcomes);
        let succeeded = ok_group.len();
        let failed = err_group.len();

        let ok_path = write_group(&ok_group, &batch, self.staging.processed_dir(), OK_SUFFIX)?;
        let err_path = write_group(&err_group, &batch, self.staging.error_dir(), ERROR_SUFFIX)?;

        if let Some(path) = &ok_path {
            staged.advance(Stage::LocalProcessed);
            self.staging
                .upload_artifact(path, ArtifactKind::Processed)
                .await?;
            staged.advance(Stage::RemoteProcessed);
        }
        if let Some(path) = &err_path {
            staged.advance(Stage::LocalError);
            self.staging
                .upload_artifact(path, ArtifactKind::Error)
                .await?;
            staged.advance(Stage::RemoteError);
        }

        // Artifacts are durable; only now may the original disappear
        self.staging.finalize(staged).await?;

        tracing::info!(
            file = %staged.file_name(),
            succeeded,
            failed,
            "File completed"
        );
        Ok((succeeded, failed))
    }
}
