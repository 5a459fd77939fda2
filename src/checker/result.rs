//! Validation result types.

use serde::Serialize;
use std::fmt;

/// Whether the lint service accepted the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStatus::Valid => write!(f, "Valid"),
            ValidationStatus::Invalid => write!(f, "Invalid"),
        }
    }
}

/// A raw message reported by the linter, for example
/// `PKG-008, FATAL, [Unable to read file 'error in opening zip file'.], book.epub`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError(String);

impl ValidationError {
    /// The message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of validating one EPUB file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            status: ValidationStatus::Valid,
            errors: Vec::new(),
        }
    }

    /// A failing result carrying the linter's messages in order.
    pub fn invalid<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ValidationError>,
    {
        Self {
            status: ValidationStatus::Invalid,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the lint service accepted the file.
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "OK");
        }
        write!(f, "Invalid:")?;
        for error in &self.errors {
            write!(f, "\n{}", error)?;
        }
        Ok(())
    }
}
