//! End-to-end pipeline lifecycle tests
//!
//! Exercises the full remote-pending → artifact → finalize lifecycle
//! against an in-memory object store and a scripted sink, without any
//! network or database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use stevedore::adapters::sink::{FeedProfile, RecordSink};
use stevedore::adapters::store::ObjectStore;
use stevedore::config::{secret_string, LocalConfig, StorageConfig};
use stevedore::core::pipeline::{Pipeline, SinkFactory};
use stevedore::core::staging::StagingCoordinator;
use stevedore::domain::{Outcome, Record, Result};
use tempfile::TempDir;

/// In-memory object store
#[derive(Default)]
struct MemoryStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
    fail_deletes: AtomicBool,
}

impl MemoryStore {
    fn with_object(key: &str, body: &[u8]) -> Arc<Self> {
        let store = Self::default();
        store
            .objects
            .lock()
            .unwrap()
            .insert(key.to_string(), body.to_vec());
        Arc::new(store)
    }

    fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    fn body(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with(prefix) && !k.ends_with('/'))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| stevedore::domain::StevedoreError::Staging(format!("no object {key}")))
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<()> {
        self.objects.lock().unwrap().insert(key.to_string(), body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(stevedore::domain::StevedoreError::Staging(
                "delete refused".to_string(),
            ));
        }
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Call log shared between the test and every sink instance
#[derive(Default)]
struct SinkLog {
    opens: usize,
    submits: Vec<String>,
    commits: usize,
}

/// Sink that rejects records with an absent AMOUNT value
struct ScriptedSink {
    log: Arc<Mutex<SinkLog>>,
}

#[async_trait]
impl RecordSink for ScriptedSink {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn profile(&self) -> FeedProfile {
        FeedProfile {
            delimiter: b';',
            required_columns: &["ID", "AMOUNT"],
        }
    }

    async fn open(&mut self) -> Result<()> {
        self.log.lock().unwrap().opens += 1;
        Ok(())
    }

    async fn submit(&mut self, record: &Record) -> Result<Outcome> {
        let id = record.get("ID").unwrap_or("").to_string();
        self.log.lock().unwrap().submits.push(id);

        match record.get("AMOUNT") {
            Some(_) => Ok(Outcome::Success),
            None => Ok(Outcome::failure("invalid amount")),
        }
    }

    async fn commit(&mut self) -> Result<()> {
        self.log.lock().unwrap().commits += 1;
        Ok(())
    }
}

fn pipeline_over(
    store: Arc<MemoryStore>,
    dirs: &TempDir,
    log: Arc<Mutex<SinkLog>>,
) -> Pipeline {
    let storage = StorageConfig {
        bucket: "staging".to_string(),
        region: "eu-west-1".to_string(),
        access_key: "test".to_string(),
        secret_key: secret_string("test".to_string()),
        endpoint: None,
        path_style: false,
        pending_prefix: "inbound/pending/".to_string(),
        processed_prefix: "inbound/processed/".to_string(),
        error_prefix: "inbound/error/".to_string(),
    };
    let local = LocalConfig {
        pending_dir: dirs.path().join("pending").to_string_lossy().into_owned(),
        processed_dir: dirs.path().join("processed").to_string_lossy().into_owned(),
        error_dir: dirs.path().join("error").to_string_lossy().into_owned(),
    };

    let coordinator = StagingCoordinator::new(store, storage, local);
    let factory: SinkFactory = Box::new(move || {
        Ok(Box::new(ScriptedSink { log: log.clone() }) as Box<dyn RecordSink>)
    });
    Pipeline::new(coordinator, factory)
}

#[tokio::test]
async fn test_mixed_batch_produces_both_artifacts() {
    let store = MemoryStore::with_object(
        "inbound/pending/batch.csv",
        b"ID;AMOUNT\n1;100\n2;\n3;300\n",
    );
    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store.clone(), &dirs, log.clone());

    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.files_found, 1);
    assert_eq!(summary.files_completed, 1);
    assert_eq!(summary.records_succeeded, 2);
    assert_eq!(summary.records_failed, 1);
    assert!(summary.is_clean());

    let ok_body = store.body("inbound/processed/batch_ok.csv").unwrap();
    assert_eq!(ok_body, b"ID;AMOUNT\n1;100\n3;300\n");

    let err_body = store.body("inbound/error/batch_error.csv").unwrap();
    assert_eq!(err_body, b"ID;AMOUNT;ERROR\n2;;invalid amount\n");

    // Original pending object is gone, local pending copy too
    assert!(store.body("inbound/pending/batch.csv").is_none());
    assert!(!dirs.path().join("pending/batch.csv").exists());

    // Sequential lifecycle: one open, three submits in file order, one commit
    let log = log.lock().unwrap();
    assert_eq!(log.opens, 1);
    assert_eq!(log.submits, vec!["1", "2", "3"]);
    assert_eq!(log.commits, 1);
}

#[tokio::test]
async fn test_all_success_writes_no_error_artifact() {
    let store = MemoryStore::with_object("inbound/pending/clean.csv", b"ID;AMOUNT\n1;10\n2;20\n");
    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store.clone(), &dirs, log);

    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.records_succeeded, 2);
    assert_eq!(summary.records_failed, 0);
    assert!(store.body("inbound/processed/clean_ok.csv").is_some());
    assert!(!store
        .keys()
        .iter()
        .any(|k| k.starts_with("inbound/error/")));
}

#[tokio::test]
async fn test_missing_required_column_leaves_file_pending() {
    let store = MemoryStore::with_object("inbound/pending/bad.csv", b"ID;TOTAL\n1;100\n");
    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store.clone(), &dirs, log.clone());

    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.files_found, 1);
    assert_eq!(summary.files_failed, 1);
    assert!(!summary.is_clean());
    assert!(summary.errors[0].error.contains("AMOUNT"));

    // No sink interaction, no artifacts, original still pending
    assert_eq!(log.lock().unwrap().opens, 0);
    assert!(store.body("inbound/pending/bad.csv").is_some());
    assert_eq!(store.keys().len(), 1);
}

#[tokio::test]
async fn test_header_only_file_finalizes_without_artifacts() {
    let store = MemoryStore::with_object("inbound/pending/empty.csv", b"ID;AMOUNT\n");
    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store.clone(), &dirs, log);

    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.files_completed, 1);
    assert_eq!(summary.records_succeeded, 0);
    // No record groups, so no artifacts, but the lifecycle still completes
    assert!(store.keys().is_empty());
}

#[tokio::test]
async fn test_no_pending_files_short_circuits() {
    let store = Arc::new(MemoryStore::default());
    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store, &dirs, log.clone());

    let summary = pipeline.run().await.unwrap();

    assert_eq!(summary.files_found, 0);
    assert!(summary.is_clean());
    assert_eq!(log.lock().unwrap().opens, 0);
}

/// Sink whose connection drops on the first submit
struct DisconnectedSink {
    log: Arc<Mutex<SinkLog>>,
}

#[async_trait]
impl RecordSink for DisconnectedSink {
    fn name(&self) -> &'static str {
        "disconnected"
    }

    fn profile(&self) -> FeedProfile {
        FeedProfile {
            delimiter: b';',
            required_columns: &["ID", "AMOUNT"],
        }
    }

    async fn open(&mut self) -> Result<()> {
        self.log.lock().unwrap().opens += 1;
        Ok(())
    }

    async fn submit(&mut self, record: &Record) -> Result<Outcome> {
        let id = record.get("ID").unwrap_or("").to_string();
        self.log.lock().unwrap().submits.push(id);
        Err(stevedore::domain::StevedoreError::Connectivity(
            "server closed the connection unexpectedly".to_string(),
        ))
    }

    async fn commit(&mut self) -> Result<()> {
        self.log.lock().unwrap().commits += 1;
        Ok(())
    }
}

#[tokio::test]
async fn test_lost_connection_fails_the_file_not_the_run() {
    let store = MemoryStore::with_object("inbound/pending/a.csv", b"ID;AMOUNT\n1;100\n");
    store
        .objects
        .lock()
        .unwrap()
        .insert("inbound/pending/b.csv".to_string(), b"ID;AMOUNT\n2;200\n".to_vec());

    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let storage = StorageConfig {
        bucket: "staging".to_string(),
        region: "eu-west-1".to_string(),
        access_key: "test".to_string(),
        secret_key: secret_string("test".to_string()),
        endpoint: None,
        path_style: false,
        pending_prefix: "inbound/pending/".to_string(),
        processed_prefix: "inbound/processed/".to_string(),
        error_prefix: "inbound/error/".to_string(),
    };
    let local = LocalConfig {
        pending_dir: dirs.path().join("pending").to_string_lossy().into_owned(),
        processed_dir: dirs.path().join("processed").to_string_lossy().into_owned(),
        error_dir: dirs.path().join("error").to_string_lossy().into_owned(),
    };
    let coordinator = StagingCoordinator::new(store.clone(), storage, local);
    let factory_log = log.clone();
    let factory: SinkFactory = Box::new(move || {
        Ok(Box::new(DisconnectedSink {
            log: factory_log.clone(),
        }) as Box<dyn RecordSink>)
    });
    let pipeline = Pipeline::new(coordinator, factory);

    let summary = pipeline.run().await.unwrap();

    // Connection loss is fatal per file, never for the run: both files
    // are attempted and both stay pending
    assert_eq!(summary.files_found, 2);
    assert_eq!(summary.files_failed, 2);
    let failed: Vec<&str> = summary.errors.iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(failed, vec!["a.csv", "b.csv"]);
    assert_eq!(log.lock().unwrap().opens, 2);
    assert!(store.body("inbound/pending/a.csv").is_some());
    assert!(store.body("inbound/pending/b.csv").is_some());
}

#[tokio::test]
async fn test_failed_finalize_is_retried_safely_next_run() {
    let store = MemoryStore::with_object("inbound/pending/batch.csv", b"ID;AMOUNT\n1;100\n");
    store.fail_deletes.store(true, Ordering::SeqCst);

    let dirs = TempDir::new().unwrap();
    let log = Arc::new(Mutex::new(SinkLog::default()));
    let pipeline = pipeline_over(store.clone(), &dirs, log.clone());

    // First run: artifacts upload, then the delete fails, so the file
    // stays pending
    let summary = pipeline.run().await.unwrap();
    assert_eq!(summary.files_failed, 1);
    assert!(store.body("inbound/pending/batch.csv").is_some());
    assert!(store.body("inbound/processed/batch_ok.csv").is_some());

    // Second run reprocesses the same file: at-least-once means the
    // record is submitted again and the artifact is overwritten
    store.fail_deletes.store(false, Ordering::SeqCst);
    let summary = pipeline.run().await.unwrap();
    assert_eq!(summary.files_completed, 1);
    assert!(store.body("inbound/pending/batch.csv").is_none());
    assert_eq!(
        store.body("inbound/processed/batch_ok.csv").unwrap(),
        b"ID;AMOUNT\n1;100\n"
    );
    assert_eq!(log.lock().unwrap().submits, vec!["1", "1"]);
}
