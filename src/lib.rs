//! checkepub - Validate EPUB files with the HamePub Lint API.
//!
//! The EPUB is base64-encoded on the fly and streamed to the lint service
//! as the request body, so files of any size are checked without being
//! loaded into memory. The service's JSON verdict comes back as a
//! [`ValidationResult`].
//!
//! # Modules
//!
//! - [`checker`] - Lint service client, configuration and result types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`stream`] - Streaming base64 encoder and bounded pipe
//!
//! # Example
//!
//! ```
//! use checkepub::parse_response;
//!
//! let result = parse_response(r#"{"success":false,"messages":["PKG-008, FATAL, ..."]}"#.as_bytes()).unwrap();
//! assert_eq!(result.to_string(), "Invalid:\nPKG-008, FATAL, ...");
//! ```
//!
//! For checks against a live endpoint, see [`Checker`].

pub mod checker;
pub mod cli;
pub mod error;
pub mod stream;

pub use checker::{
    check, parse_response, Checker, CheckerConfig, ValidationError, ValidationResult,
    ValidationStatus,
};
pub use error::{CheckError, Result};
