//! Remote import service sink
//!
//! Submits each rate record to an HTTP import service with basic
//! authentication. The service is stateless per record, so `open` and
//! `commit` carry no transaction semantics. Transport failures are
//! reported as record failures with a fixed operator-facing reason rather
//! than aborting the file; the service itself may be flapping while the
//! rest of the batch goes through.

use crate::adapters::remote::models::{ImportFault, ImportRequest};
use crate::adapters::sink::{FeedProfile, RecordSink};
use crate::config::RemoteConfig;
use crate::domain::{Outcome, Record, Result, StevedoreError};
use crate::logging::sanitize;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Columns the exchange rate feed must carry
pub const RATE_COLUMNS: &[&str] = &[
    "RATE_DATE",
    "BASE_CURRENCY",
    "QUOTE_CURRENCY",
    "MID_RATE",
    "SOURCE",
];

/// Fixed reason recorded when the service cannot be reached at all
pub const TRANSPORT_FAILURE_REASON: &str =
    "Import service connection attempt has failed. Please try again.";

/// Record sink backed by the remote import service
pub struct RemoteSink {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteSink {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StevedoreError::Connectivity(sanitize(&e.to_string())))?;

        Ok(Self { config, client })
    }
}

/// Keep only the first sentence of a service explanation
///
/// Service fault explanations run to several sentences of remediation
/// prose; only the first names the actual rejection.
fn first_sentence(explanation: &str) -> &str {
    explanation.split(". ").next().unwrap_or(explanation)
}

#[async_trait]
impl RecordSink for RemoteSink {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn profile(&self) -> FeedProfile {
        FeedProfile {
            delimiter: b',',
            required_columns: RATE_COLUMNS,
        }
    }

    async fn open(&mut self) -> Result<()> {
        // Stateless service, nothing to establish up front
        Ok(())
    }

    async fn submit(&mut self, record: &Record) -> Result<Outcome> {
        // One delimited line per call, fields in feed column order
        let line: Vec<&str> = RATE_COLUMNS
            .iter()
            .map(|c| record.get(c).unwrap_or(""))
            .collect();
        let request = ImportRequest {
            record: line.join(","),
        };

        let response = match self
            .client
            .post(&self.config.endpoint)
            .basic_auth(
                &self.config.username,
                Some(self.config.password.expose_secret().as_ref()),
            )
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %sanitize(&e.to_string()), "Import service unreachable");
                return Ok(Outcome::failure(TRANSPORT_FAILURE_REASON));
            }
        };

        if response.status().is_success() {
            return Ok(Outcome::Success);
        }

        let status = response.status();
        let reason = match response.json::<ImportFault>().await {
            Ok(fault) if !fault.explanation.is_empty() => {
                sanitize(first_sentence(&fault.explanation))
            }
            _ => format!("Import service rejected the record (HTTP {})", status.as_u16()),
        };

        Ok(Outcome::failure(reason))
    }

    async fn commit(&mut self) -> Result<()> {
        // No batch scope to close
        Ok(())
    }
}
