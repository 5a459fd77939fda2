//! Result rendering for the terminal.

use console::style;

use super::args::OutputFormat;
use crate::checker::ValidationResult;

/// Render `result` in the requested format.
///
/// With `color` off, the human format is exactly the result's `Display`.
pub fn render(result: &ValidationResult, format: OutputFormat, color: bool) -> String {
    match format {
        // Only strings and a unit enum: serializing to a String cannot fail.
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Human if !color => result.to_string(),
        OutputFormat::Human => {
            if result.is_valid() {
                return style("OK").green().force_styling(true).to_string();
            }
            let mut out = style("Invalid:").red().bold().force_styling(true).to_string();
            for error in &result.errors {
                out.push('\n');
                out.push_str(error.as_str());
            }
            out
        }
    }
}
