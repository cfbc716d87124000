//! Configuration management
//!
//! TOML configuration with `${VAR}` environment substitution and
//! secrecy-wrapped credentials. The configuration is built once at process
//! start and passed by reference into the pipeline, staging coordinator,
//! and sink constructors; nothing reads the environment after startup.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, LocalConfig, LoggingConfig, PostgresConfig, RemoteConfig, SinkTarget,
    StevedoreConfig, StorageConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
