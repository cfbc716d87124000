//! Staging lifecycle

pub mod coordinator;

pub use coordinator::{ArtifactKind, StagingCoordinator};
