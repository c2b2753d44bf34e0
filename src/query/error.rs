//! Query state error types

use thiserror::Error;

/// A media type filter value outside the accepted set
///
/// Accepted values are `""` (all), `video`, `audio`, `image` and `document`.
/// Rejection leaves the query state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid media type filter: '{value}' (expected one of: \"\", video, audio, image, document)")]
pub struct InvalidFilterError {
    /// The rejected value
    pub value: String,
}

impl InvalidFilterError {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
