//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::checker::{CheckerConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// checkepub - Validate an EPUB file with the HamePub Lint API.
#[derive(Debug, Parser)]
#[command(name = "checkepub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the EPUB file to validate
    #[arg(value_name = "EPUB_FILE_PATH")]
    pub file: PathBuf,

    /// Lint service endpoint
    #[arg(long, env = "CHECKEPUB_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Request timeout in seconds, upload included
    #[arg(
        long,
        env = "CHECKEPUB_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Checker settings from the parsed flags.
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::default()
            .with_base_url(&self.url)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OK`, or `Invalid:` followed by one message per line
    Human,
    /// The result as a JSON document
    Json,
}
