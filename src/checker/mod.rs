//! EPUB validation against the HamePub Lint API.
//!
//! A [`Checker`] streams the base64 encoding of an EPUB file to the lint
//! service and turns the JSON answer into a [`ValidationResult`].
//!
//! - [`client`] - Request/response cycle
//! - [`config`] - Endpoint and timeout settings
//! - [`response`] - JSON body decoding
//! - [`result`] - Result types and their rendering

pub mod client;
pub mod config;
pub mod response;
pub mod result;

pub use client::{check, Checker};
pub use config::{CheckerConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use response::parse_response;
pub use result::{ValidationError, ValidationResult, ValidationStatus};
