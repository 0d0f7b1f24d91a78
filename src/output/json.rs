//! JSON output formatting for todotxt.

use serde_json::{json, Value};

use crate::error::TodoTxtError;
use crate::output::ParsedLine;
use crate::task::TodoTxtTask;
use crate::validation::ValidationErrors;

/// Format a single task as JSON, including its rendered line
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_task_json(task: &TodoTxtTask) -> Result<String, TodoTxtError> {
    Ok(serde_json::to_string_pretty(&task.view())?)
}

/// Format a validation report as JSON
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_errors_json(line: &str, errors: &ValidationErrors) -> Result<String, TodoTxtError> {
    Ok(serde_json::to_string_pretty(&errors_value(line, errors)?)?)
}

/// Format a batch of parse results as JSON
///
/// # Errors
///
/// Returns `TodoTxtError::Json` if JSON serialization fails.
pub fn format_parsed_json(lines: &[ParsedLine]) -> Result<String, TodoTxtError> {
    let items = lines
        .iter()
        .map(|parsed| match &parsed.result {
            Ok(task) => Ok(json!({
                "line": parsed.line,
                "task": task.view(),
            })),
            Err(errors) => errors_value(&parsed.line, errors),
        })
        .collect::<Result<Vec<_>, TodoTxtError>>()?;

    let output = json!({
        "count": lines.len(),
        "failed": lines.iter().filter(|l| !l.is_ok()).count(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn errors_value(line: &str, errors: &ValidationErrors) -> Result<Value, TodoTxtError> {
    Ok(json!({
        "line": line,
        "message": errors.to_string(),
        "errors": serde_json::to_value(errors.errors())?,
    }))
}
