//! Error types for the TVmaze show browser
//!
//! This module defines all error types used throughout the library.
//! TvmazeError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVmaze catalog operations
#[derive(Error, Debug)]
pub enum TvmazeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body did not have the expected JSON shape
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    /// Search was attempted with an empty query
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// A show identifier attribute could not be parsed
    #[error("Invalid show ID: {0}")]
    InvalidShowId(String),

    /// Requested resource was not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Client configuration cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Server answered with a status the client does not handle
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),
}

impl From<serde_json::Error> for TvmazeError {
    fn from(err: serde_json::Error) -> Self {
        TvmazeError::DecodeError(err.to_string())
    }
}

/// Serialize TvmazeError as a string for Tauri compatibility
impl Serialize for TvmazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVmaze catalog operations
pub type Result<T> = std::result::Result<T, TvmazeError>;
