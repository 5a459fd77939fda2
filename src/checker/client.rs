//! Lint service client.

use reqwest::blocking::{Body, Client};
use reqwest::StatusCode;
use std::fs::File;
use std::path::Path;

use super::config::CheckerConfig;
use super::response::parse_response;
use super::result::ValidationResult;
use crate::error::{CheckError, Result};
use crate::stream::encode_reader;

/// Submits EPUB files to the lint service.
///
/// A `Checker` holds no per-call state, so one instance can serve
/// concurrent checks from several threads.
///
/// # Example
///
/// ```no_run
/// use checkepub::checker::{Checker, CheckerConfig};
///
/// let checker = Checker::new(CheckerConfig::default()).unwrap();
/// let result = checker.check("book.epub").unwrap();
/// println!("{}", result);
/// ```
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckerConfig,
    client: Client,
}

impl Checker {
    /// Create a checker with an HTTP client built from `config`.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("checkepub/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Create a checker that sends requests through `client`.
    ///
    /// The client's own timeout applies; `config.timeout` is not consulted.
    pub fn with_client(config: CheckerConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Validate the EPUB file at `path`.
    ///
    /// The file is base64-encoded on the fly and streamed as the request
    /// body. Fails before any network traffic if the file cannot be opened.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<ValidationResult> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CheckError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            "Submitting {} to {}",
            path.display(),
            self.config.base_url
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .body(encoded_body(file))
            .send()?;

        let status = response.status();
        tracing::debug!("Lint service responded with {}", status);
        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                status: status.to_string(),
            });
        }

        parse_response(response)
    }
}

/// Streamed body with no known length, so it is sent chunked.
fn encoded_body(file: File) -> Body {
    Body::new(encode_reader(file))
}

/// Validate `path` with the default configuration.
///
/// A single attempt: no retries and no caching.
pub fn check(path: impl AsRef<Path>) -> Result<ValidationResult> {
    Checker::new(CheckerConfig::default())?.check(path)
}
