//! Repository error types
//!
//! Every variant is recoverable from the core's point of view: a failed
//! query leaves the last good collection on screen and flags an error.
//!
//! # Error Types
//!
//! - **`Io`**: the catalog file could not be read
//! - **`Parse`**: the catalog is not valid asset JSON
//! - **`Backend`**: the backend answered with an error
//! - **`Timeout`**: the backend did not answer in time

use thiserror::Error;

/// Errors from an [`AssetRepository`](super::AssetRepository)
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Catalog could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be parsed
    #[error("Invalid asset catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend reported a failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Backend did not answer in time
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
