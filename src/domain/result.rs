//! Result type alias for Stevedore

use super::errors::StevedoreError;

/// Result type alias for Stevedore operations
///
/// Convenience alias using `StevedoreError` as the error type. Use this
/// throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, StevedoreError>;
