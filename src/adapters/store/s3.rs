//! S3 object store implementation
//!
//! Thin wrapper over the AWS SDK implementing [`ObjectStore`]. Supports
//! S3-compatible stores through a custom endpoint and path-style
//! addressing. SDK errors are flattened into sanitized `Staging` messages;
//! no SDK type crosses the adapter boundary.

use crate::adapters::store::traits::ObjectStore;
use crate::config::StorageConfig;
use crate::domain::{Result, StevedoreError};
use crate::logging::sanitize;
use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use secrecy::ExposeSecret;

/// S3-backed object store
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a client from the storage configuration
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            config.secret_key.expose_secret().as_ref(),
            None,
            None,
            "stevedore-storage",
        );

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(config.region.clone()))
            .force_path_style(config.path_style);

        if let Some(endpoint) = &config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config_builder.build());

        tracing::info!(bucket = %config.bucket, region = %config.region, "Object store client initialized");

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut paginator = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        while let Some(page) = paginator.next().await {
            let page = page.map_err(|e| {
                StevedoreError::Staging(sanitize(&format!(
                    "failed to list objects under {prefix}: {e}"
                )))
            })?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    // Skip the prefix placeholder object itself
                    if !key.ends_with('/') {
                        keys.push(key.to_string());
                    }
                }
            }
        }

        tracing::debug!(prefix = %prefix, count = keys.len(), "Listed pending objects");
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                StevedoreError::Staging(sanitize(&format!("failed to download {key}: {e}")))
            })?;

        let data = response.body.collect().await.map_err(|e| {
            StevedoreError::Staging(sanitize(&format!("failed to read body of {key}: {e}")))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                StevedoreError::Staging(sanitize(&format!("failed to upload {key}: {e}")))
            })?;

        tracing::info!(key = %key, bucket = %self.bucket, "Uploaded object");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                StevedoreError::Staging(sanitize(&format!("failed to delete {key}: {e}")))
            })?;

        tracing::info!(key = %key, bucket = %self.bucket, "Deleted object");
        Ok(())
    }
}
