use std::fmt::Write;

use colored::Colorize;

use crate::core::format_date;
use crate::output::ParsedLine;
use crate::task::TodoTxtTask;
use crate::validation::ValidationErrors;

/// Format a single task as pretty output
pub fn format_task_pretty(task: &TodoTxtTask) -> String {
    let status_icon = if task.is_completed() {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, task.clean_text().bold());

    if let Some(priority) = task.priority() {
        let _ = writeln!(output, "  {}: {}", "Priority".dimmed(), priority.to_string().yellow());
    }

    if let Some(created) = task.created_at() {
        let _ = writeln!(output, "  {}: {}", "Created".dimmed(), format_date(created));
    }

    if let Some(completed) = task.completed_at() {
        let _ = writeln!(output, "  {}: {}", "Completed".dimmed(), format_date(completed));
    }

    if !task.projects().is_empty() {
        let projects = task
            .projects()
            .iter()
            .map(|p| format!("+{p}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(output, "  {}: {}", "Projects".dimmed(), projects.cyan());
    }

    if !task.contexts().is_empty() {
        let contexts = task
            .contexts()
            .iter()
            .map(|c| format!("@{c}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(output, "  {}: {}", "Contexts".dimmed(), contexts.cyan());
    }

    for (key, value) in task.add_ons() {
        let _ = writeln!(output, "  {}: {}", key.dimmed(), value);
    }

    let _ = writeln!(output, "  {}: {}", "Line".dimmed(), task.render());

    output
}

/// Format a validation report as pretty output
pub fn format_errors_pretty(line: &str, errors: &ValidationErrors) -> String {
    let mut output = format!("{} {}\n", "[!]".red(), line.bold());

    for error in errors {
        let _ = writeln!(
            output,
            "  {} {} ({})",
            "-".red(),
            error,
            error.kind().to_string().dimmed()
        );
    }

    output
}

/// Format a batch of parse results as pretty output
pub fn format_parsed_pretty(lines: &[ParsedLine]) -> String {
    if lines.is_empty() {
        return "No lines to parse".to_string();
    }

    let mut output = String::new();
    for parsed in lines {
        match &parsed.result {
            Ok(task) => output.push_str(&format_task_pretty(task)),
            Err(errors) => output.push_str(&format_errors_pretty(&parsed.line, errors)),
        }
    }

    let failed = lines.iter().filter(|l| !l.is_ok()).count();
    if lines.len() > 1 {
        output.push_str(&"─".repeat(60));
        output.push('\n');
        let _ = write!(output, "{} lines, {} failed", lines.len(), failed);
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use crate::validation::ValidationError;
    use chrono::NaiveDate;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_task_pretty_open() {
        plain();
        let task = TodoTxtTask::new("buy milk @store")
            .with_contexts(["store"])
            .with_priority(Priority::new('B').unwrap());

        let output = format_task_pretty(&task);
        assert!(output.starts_with("[ ] buy milk @store"));
        assert!(output.contains("Priority: B"));
        assert!(output.contains("Contexts: @store"));
        assert!(output.contains("Line: (B) buy milk @store"));
    }

    #[test]
    fn test_format_task_pretty_completed() {
        plain();
        let task = TodoTxtTask::new("file taxes")
            .with_completed_at(NaiveDate::from_ymd_opt(2016, 4, 14).unwrap())
            .with_add_on("due", "2016-04-15");

        let output = format_task_pretty(&task);
        assert!(output.starts_with("[x] file taxes"));
        assert!(output.contains("Completed: 2016-04-14"));
        assert!(output.contains("due: 2016-04-15"));
    }

    #[test]
    fn test_format_errors_pretty() {
        plain();
        let errors = ValidationErrors::new(vec![ValidationError::CompletedAtMissing]);
        let output = format_errors_pretty("x oops", &errors);
        assert!(output.contains("[!] x oops"));
        assert!(output.contains("Task is completed but has no completed at date"));
        assert!(output.contains("(completed-at-missing)"));
    }

    #[test]
    fn test_format_parsed_pretty_summary() {
        plain();
        let lines = vec![
            ParsedLine {
                line: "a".to_string(),
                result: Ok(TodoTxtTask::new("a")),
            },
            ParsedLine {
                line: String::new(),
                result: Err(ValidationErrors::new(vec![ValidationError::NoTextGiven])),
            },
        ];
        let output = format_parsed_pretty(&lines);
        assert!(output.ends_with("2 lines, 1 failed"));
    }

    #[test]
    fn test_format_parsed_pretty_empty() {
        assert_eq!(format_parsed_pretty(&[]), "No lines to parse");
    }
}
