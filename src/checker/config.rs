//! Checker configuration.

use std::time::Duration;

/// Endpoint of the HamePub Lint API.
pub const DEFAULT_BASE_URL: &str = "http://lint.hametuha.pub/validator";

/// Large uploads can take minutes, so the default is generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Settings for a [`Checker`](super::Checker).
///
/// # Example
///
/// ```
/// use checkepub::checker::CheckerConfig;
/// use std::time::Duration;
///
/// let config = CheckerConfig::default()
///     .with_base_url("http://localhost:8080/validator")
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.base_url, "http://localhost:8080/validator");
/// assert_eq!(config.timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// URL the EPUB is POSTed to.
    pub base_url: String,
    /// Timeout for the whole request, upload included.
    pub timeout: Duration,
}

impl CheckerConfig {
    /// Use a different lint endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a different request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
