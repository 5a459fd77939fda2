//! Error types for checkepub operations.
//!
//! This module defines [`CheckError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias for
//! convenience.
//!
//! Each variant wraps the underlying failure unchanged so callers can match
//! on the category and still reach the original error through
//! [`std::error::Error::source`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for a validation call.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The EPUB file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request could not be built, sent, or completed.
    #[error("Request to lint service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The lint service answered with something other than `200 OK`.
    #[error("unexpected HTTP response status {status:?}")]
    UnexpectedStatus { status: String },

    /// The response body was not the JSON document we expect.
    #[error("Failed to decode lint service response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for checkepub operations.
pub type Result<T> = std::result::Result<T, CheckError>;
