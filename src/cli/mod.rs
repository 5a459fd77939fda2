//! Command-line interface for checkepub.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`output`] - Human and JSON rendering of results

pub mod args;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use output::render;

use crate::checker::Checker;
use crate::error::Result;

/// Outcome of a CLI run: what to print and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub exit_code: i32,
}

/// Validate the file named on the command line.
///
/// An invalid EPUB is a successful run with exit code 1; errors are
/// reserved for failures to complete the check.
pub fn run(cli: &Cli, color: bool) -> Result<CommandResult> {
    let checker = Checker::new(cli.checker_config())?;
    let result = checker.check(&cli.file)?;
    tracing::debug!("{} is {}", cli.file.display(), result.status);

    Ok(CommandResult {
        output: render(&result, cli.format, color),
        exit_code: if result.is_valid() { 0 } else { 1 },
    })
}
