//! Lint service response decoding.

use serde::Deserialize;
use std::io::Read;

use super::result::ValidationResult;
use crate::error::Result;

/// Wire shape of the lint service's JSON answer.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    messages: Option<Vec<String>>,
}

/// Decode a lint service response body into a [`ValidationResult`].
///
/// `messages` is ignored when `success` is true. A missing or `null`
/// `success` counts as false, and a missing or `null` `messages` list as
/// empty. Only the first JSON value in the body is read.
pub fn parse_response<R: Read>(reader: R) -> Result<ValidationResult> {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let response = ApiResponse::deserialize(&mut deserializer)?;
    if response.success.unwrap_or(false) {
        return Ok(ValidationResult::valid());
    }
    Ok(ValidationResult::invalid(
        response.messages.unwrap_or_default(),
    ))
}
