//! Object store abstraction trait
//!
//! The staging coordinator talks to the remote store only through this
//! trait, so lifecycle ordering can be tested against an in-memory
//! implementation without any network.

use crate::domain::Result;
use async_trait::async_trait;

/// Remote object store operations required by the staging lifecycle
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List object keys under a prefix
    ///
    /// The prefix key itself (a trailing-`/` placeholder some consoles
    /// create) must not appear in the result.
    ///
    /// # Errors
    ///
    /// Returns [`StevedoreError::Staging`](crate::domain::StevedoreError)
    /// if the listing fails.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;

    /// Download an object's content
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Upload an object
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<()>;

    /// Delete an object
    async fn delete(&self, key: &str) -> Result<()>;
}
