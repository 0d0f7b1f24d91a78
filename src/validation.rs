//! Validation errors produced while parsing a todo.txt line.
//!
//! A single parse collects every problem it finds. Each problem is a
//! [`ValidationError`]; its [`ErrorKind`] is the identifier used to suppress
//! it (see [`crate::parser::TodoTxtParser::ignore`]).

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a class of validation error.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Input absent, empty or whitespace-only.
    NoTextGiven,
    /// Nothing left for the description after metadata was removed.
    NoTaskDescription,
    /// Created-at token is date-shaped but not a calendar day.
    InvalidCreatedAtDate,
    /// Completed-at token is date-shaped but not a calendar day.
    InvalidCompletedAtDate,
    /// Created-at date is after today.
    CreatedAtInTheFuture,
    /// Completed-at date is after today.
    CompletedAtInTheFuture,
    /// Completion marker without a usable completed-at date.
    CompletedAtMissing,
    /// Completed-at date precedes created-at date.
    CompletedAtBeforeCreatedAt,
    /// The same add-on key appears twice.
    DuplicateAddOnKey,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::NoTextGiven,
        Self::NoTaskDescription,
        Self::InvalidCreatedAtDate,
        Self::InvalidCompletedAtDate,
        Self::CreatedAtInTheFuture,
        Self::CompletedAtInTheFuture,
        Self::CompletedAtMissing,
        Self::CompletedAtBeforeCreatedAt,
        Self::DuplicateAddOnKey,
    ];

    /// The kebab-case identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoTextGiven => "no-text-given",
            Self::NoTaskDescription => "no-task-description",
            Self::InvalidCreatedAtDate => "invalid-created-at-date",
            Self::InvalidCompletedAtDate => "invalid-completed-at-date",
            Self::CreatedAtInTheFuture => "created-at-in-the-future",
            Self::CompletedAtInTheFuture => "completed-at-in-the-future",
            Self::CompletedAtMissing => "completed-at-missing",
            Self::CompletedAtBeforeCreatedAt => "completed-at-before-created-at",
            Self::DuplicateAddOnKey => "duplicate-add-on-key",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found in a todo.txt line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("No text given")]
    NoTextGiven,

    #[error("Task is missing a description/only has metadata")]
    NoTaskDescription,

    #[error("Invalid created at date: {token}")]
    InvalidCreatedAtDate { token: String },

    #[error("Invalid completed at date: {token}")]
    InvalidCompletedAtDate { token: String },

    #[error("Created at date is in the future: {date}")]
    CreatedAtInTheFuture { date: NaiveDate },

    #[error("Completed at date is in the future: {date}")]
    CompletedAtInTheFuture { date: NaiveDate },

    #[error("Task is completed but has no completed at date")]
    CompletedAtMissing,

    #[error("Task was completed before it was created ({completed_at} < {created_at})")]
    CompletedAtBeforeCreatedAt {
        completed_at: NaiveDate,
        created_at: NaiveDate,
    },

    #[error("Duplicate add-on key: {key} ({previous} replaced by {value})")]
    DuplicateAddOnKey {
        key: String,
        previous: String,
        value: String,
    },
}

impl ValidationError {
    /// The suppressible kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoTextGiven => ErrorKind::NoTextGiven,
            Self::NoTaskDescription => ErrorKind::NoTaskDescription,
            Self::InvalidCreatedAtDate { .. } => ErrorKind::InvalidCreatedAtDate,
            Self::InvalidCompletedAtDate { .. } => ErrorKind::InvalidCompletedAtDate,
            Self::CreatedAtInTheFuture { .. } => ErrorKind::CreatedAtInTheFuture,
            Self::CompletedAtInTheFuture { .. } => ErrorKind::CompletedAtInTheFuture,
            Self::CompletedAtMissing => ErrorKind::CompletedAtMissing,
            Self::CompletedAtBeforeCreatedAt { .. } => ErrorKind::CompletedAtBeforeCreatedAt,
            Self::DuplicateAddOnKey { .. } => ErrorKind::DuplicateAddOnKey,
        }
    }
}

/// Every reported problem of one failed parse, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Invalid todo.txt string: {}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    #[must_use]
    pub const fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Kinds of the reported errors, in detection order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(ValidationError::kind).collect()
    }

    #[must_use]
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
