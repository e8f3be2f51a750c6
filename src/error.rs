//! Error types for the cache crate
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and the shell.
///
/// Lookups never fail: a missing key is `None`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A cache was configured with parameters it cannot honour
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The selected cache variant does not support the operation
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Malformed shell request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
