//! `parse` and `format` command implementations.

use std::io::BufRead;

use tracing::info;

use crate::cli::commands::{CommandOutput, Context};
use crate::error::TodoTxtError;
use crate::output::{format_errors, format_parsed, format_task, ParsedLine};

/// Collect the non-blank lines of `reader`.
///
/// # Errors
///
/// Returns `TodoTxtError::Io` if reading fails.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, TodoTxtError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn parse_all(ctx: &Context, lines: Vec<String>) -> Vec<ParsedLine> {
    lines
        .into_iter()
        .map(|line| {
            let result = ctx.parser.parse_on(line.as_str(), ctx.today);
            ParsedLine { line, result }
        })
        .collect()
}

/// Execute the parse command.
///
/// With a single `text`, the task (or its errors) is printed on its own;
/// otherwise every line from `input` is parsed and reported together.
///
/// # Errors
///
/// Returns an error if reading input or output formatting fails.
pub fn parse<R: BufRead>(
    ctx: &Context,
    text: Option<String>,
    input: R,
) -> Result<CommandOutput, TodoTxtError> {
    if let Some(text) = text {
        return match ctx.parser.parse_on(text.as_str(), ctx.today) {
            Ok(task) => Ok(CommandOutput::ok(format_task(&task, ctx.format)?)),
            Err(errors) => Ok(CommandOutput {
                stdout: format_errors(&text, &errors, ctx.format)?,
                stderr: String::new(),
                success: false,
            }),
        };
    }

    let parsed = parse_all(ctx, read_lines(input)?);
    let failed = parsed.iter().filter(|p| !p.is_ok()).count();
    info!(lines = parsed.len(), failed, "parsed input");

    Ok(CommandOutput {
        stdout: format_parsed(&parsed, ctx.format)?,
        stderr: String::new(),
        success: failed == 0,
    })
}

/// Execute the format command.
///
/// Valid lines are written in canonical order to stdout; invalid lines are
/// reported on stderr and left out.
///
/// # Errors
///
/// Returns an error if reading input or error formatting fails.
pub fn format<R: BufRead>(
    ctx: &Context,
    text: Option<String>,
    input: R,
) -> Result<CommandOutput, TodoTxtError> {
    let lines = match text {
        Some(text) => vec![text],
        None => read_lines(input)?,
    };

    let mut rendered = Vec::new();
    let mut reports = Vec::new();
    for parsed in parse_all(ctx, lines) {
        match parsed.result {
            Ok(task) => rendered.push(task.render()),
            Err(errors) => reports.push(format_errors(&parsed.line, &errors, ctx.format)?),
        }
    }
    info!(rendered = rendered.len(), failed = reports.len(), "formatted input");

    Ok(CommandOutput {
        stdout: rendered.join("\n"),
        success: reports.is_empty(),
        stderr: reports.join("\n"),
    })
}
