//! todo.txt line parser.
//!
//! Parses lines like "x 2016-01-03 (A) 2016-01-02 call mom @phone due:2016-01-05"
//! into a [`TodoTxtTask`], collecting every validation problem on the way.

pub mod rules;

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::ParserConfig;
use crate::core::{check_date, DateCheck};
use crate::task::TodoTxtTask;
use crate::validation::{ErrorKind, ValidationError, ValidationErrors};

use rules::{classify, ScanState, TagKind, Token};

/// Parser for single todo.txt lines.
///
/// The only state kept between calls is the set of suppressed error kinds.
///
/// # Examples
///
/// ```
/// use todotxt::parser::TodoTxtParser;
///
/// let parser = TodoTxtParser::new();
/// let task = parser.parse("(A) call mom @phone +family due:2016-12-24").unwrap();
/// assert_eq!(task.clean_text(), "call mom @phone +family");
/// assert_eq!(task.contexts(), ["phone"]);
/// assert_eq!(task.add_on("due"), Some("2016-12-24"));
///
/// assert!(parser.parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TodoTxtParser {
    ignored: HashSet<ErrorKind>,
}

impl TodoTxtParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that already suppresses `kinds`.
    #[must_use]
    pub fn with_ignored(kinds: impl IntoIterator<Item = ErrorKind>) -> Self {
        Self {
            ignored: kinds.into_iter().collect(),
        }
    }

    /// Create a parser from the `parser` section of the config file.
    #[must_use]
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::with_ignored(config.ignore.iter().copied())
    }

    /// Leave `kind` out of the error report of every later parse.
    ///
    /// Classification is unaffected: a future date is still dropped from the
    /// record, only the error describing it is hidden.
    pub fn ignore(&mut self, kind: ErrorKind) -> &mut Self {
        self.ignored.insert(kind);
        self
    }

    #[must_use]
    pub fn is_ignored(&self, kind: ErrorKind) -> bool {
        self.ignored.contains(&kind)
    }

    /// Parse a line, judging dates against today's local date.
    ///
    /// # Errors
    ///
    /// Returns every non-suppressed validation error found in the line.
    pub fn parse<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<TodoTxtTask, ValidationErrors> {
        self.parse_on(text, crate::core::today())
    }

    /// Parse a line, judging dates against `today`.
    ///
    /// # Errors
    ///
    /// Returns every non-suppressed validation error found in the line.
    pub fn parse_on<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        today: NaiveDate,
    ) -> Result<TodoTxtTask, ValidationErrors> {
        let normalized = text.into().map(normalize).unwrap_or_default();

        if normalized.is_empty() {
            let report = self.report(vec![ValidationError::NoTextGiven]);
            if !report.is_empty() {
                debug!("empty line rejected");
                return Err(ValidationErrors::new(report));
            }
        }

        let draft = normalized
            .split(' ')
            .filter(|token| !token.is_empty())
            .enumerate()
            .fold(Draft::new(today), |draft, (position, token)| {
                let state = draft.state(position);
                let class = classify(token, &state);
                debug!(position, token, ?class, "classified token");
                draft.apply(token, class)
            });

        let (mut task, errors) = draft.finish();
        let report = self.report(errors);
        if !report.is_empty() {
            debug!(line = %normalized, errors = report.len(), "line rejected");
            return Err(ValidationErrors::new(report));
        }

        task.set_original_text(normalized);
        Ok(task)
    }

    fn report(&self, errors: Vec<ValidationError>) -> Vec<ValidationError> {
        errors
            .into_iter()
            .filter(|e| !self.is_ignored(e.kind()))
            .collect()
    }
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Record under construction, threaded through the token fold.
struct Draft<'a> {
    task: TodoTxtTask,
    description: Vec<&'a str>,
    errors: Vec<ValidationError>,
    today: NaiveDate,
}

impl<'a> Draft<'a> {
    fn new(today: NaiveDate) -> Self {
        Self {
            task: TodoTxtTask::default(),
            description: Vec::new(),
            errors: Vec::new(),
            today,
        }
    }

    fn state(&self, position: usize) -> ScanState {
        ScanState {
            position,
            description_started: !self.description.is_empty(),
            completed: self.task.is_completed(),
            has_created_at: self.task.created_at().is_some(),
            has_priority: self.task.priority().is_some(),
        }
    }

    fn apply(mut self, token: &'a str, class: Token<'a>) -> Self {
        if class.is_description() {
            self.description.push(token);
        }

        match class {
            Token::CompletionMarker => self.task.mark_completed(),
            Token::CompletedAt(raw) => match check_date(raw, self.today) {
                DateCheck::Valid(date) => self.task.complete(date),
                DateCheck::InTheFuture(date) => {
                    self.errors.push(ValidationError::CompletedAtInTheFuture { date });
                }
                DateCheck::Invalid => self.errors.push(ValidationError::InvalidCompletedAtDate {
                    token: raw.to_string(),
                }),
            },
            Token::Priority(priority) => self.task.set_priority(Some(priority)),
            Token::CreatedAt(raw) => match check_date(raw, self.today) {
                DateCheck::Valid(date) => {
                    if let Some(completed_at) = self.task.completed_at() {
                        if completed_at < date {
                            self.errors.push(ValidationError::CompletedAtBeforeCreatedAt {
                                completed_at,
                                created_at: date,
                            });
                        }
                    }
                    self.task.set_created_at(Some(date));
                }
                DateCheck::InTheFuture(date) => {
                    self.errors.push(ValidationError::CreatedAtInTheFuture { date });
                }
                DateCheck::Invalid => self.errors.push(ValidationError::InvalidCreatedAtDate {
                    token: raw.to_string(),
                }),
            },
            Token::Tag { kind: TagKind::Context, name } => self.task.add_context(name),
            Token::Tag { kind: TagKind::Project, name } => self.task.add_project(name),
            Token::AddOn { key, value } => {
                if let Some(previous) = self.task.insert_add_on(key, value) {
                    self.errors.push(ValidationError::DuplicateAddOnKey {
                        key: key.to_string(),
                        previous,
                        value: value.to_string(),
                    });
                }
            }
            Token::Description => {}
        }

        self
    }

    /// Run whole-record checks and hand back the record with its errors.
    fn finish(mut self) -> (TodoTxtTask, Vec<ValidationError>) {
        let clean_text = self.description.join(" ");

        if clean_text.is_empty() {
            self.errors.push(ValidationError::NoTaskDescription);
        }

        if self.task.is_completed() && self.task.completed_at().is_none() {
            self.errors.push(ValidationError::CompletedAtMissing);
        }

        self.task.set_clean_text(clean_text);
        (self.task, self.errors)
    }
}
