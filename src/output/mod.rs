//! Output formatting for todotxt.
//!
//! This module provides formatters for displaying parse results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TodoTxtError;
use crate::task::TodoTxtTask;
use crate::validation::ValidationErrors;

pub use json::*;
pub use pretty::*;

/// Outcome of parsing one input line.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    /// The line as given.
    pub line: String,
    pub result: Result<TodoTxtTask, ValidationErrors>,
}

impl ParsedLine {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Format parse results based on output format
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_parsed(lines: &[ParsedLine], format: OutputFormat) -> Result<String, TodoTxtError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(lines)),
        OutputFormat::Json => format_parsed_json(lines),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_task(task: &TodoTxtTask, format: OutputFormat) -> Result<String, TodoTxtError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format a validation report based on output format
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_errors(
    line: &str,
    errors: &ValidationErrors,
    format: OutputFormat,
) -> Result<String, TodoTxtError> {
    match format {
        OutputFormat::Pretty => Ok(format_errors_pretty(line, errors)),
        OutputFormat::Json => format_errors_json(line, errors),
    }
}
