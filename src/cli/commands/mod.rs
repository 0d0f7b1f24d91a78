//! Command implementations for todotxt.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod parse;

pub use completions::generate_completions;
pub use parse::{format, parse, read_lines};

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::parser::TodoTxtParser;

/// Settings every line-processing command runs with.
#[derive(Debug, Clone)]
pub struct Context {
    pub parser: TodoTxtParser,
    /// Reference date for future-date checks.
    pub today: NaiveDate,
    pub format: OutputFormat,
}

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// False when at least one input line failed validation.
    pub success: bool,
}

impl CommandOutput {
    #[must_use]
    pub const fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            success: true,
        }
    }
}
