//! Date utilities for todo.txt lines.
//!
//! todo.txt only knows one date shape, `YYYY-MM-DD`. Recognising the shape
//! and validating the calendar date are separate steps: a token such as
//! `2016-01-33` has the shape of a date (so it is consumed as one) but is
//! not a real day.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format string used for every date read or written.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// Outcome of checking a date token against a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// A real calendar day, not after the reference day.
    Valid(NaiveDate),
    /// A real calendar day strictly after the reference day.
    InTheFuture(NaiveDate),
    /// Date-shaped, but not a calendar day (e.g. day 33).
    Invalid,
}

/// Whether `token` has the `YYYY-MM-DD` shape. Says nothing about validity.
#[must_use]
pub fn is_date_token(token: &str) -> bool {
    DATE_SHAPE.is_match(token)
}

/// Strictly parse a `YYYY-MM-DD` token into a calendar date.
///
/// Returns `None` for out-of-range months or days; no rollover is applied.
#[must_use]
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    if !is_date_token(token) {
        return None;
    }
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

/// Parse a date token and compare it with `today`.
#[must_use]
pub fn check_date(token: &str, today: NaiveDate) -> DateCheck {
    match parse_date(token) {
        Some(date) if date > today => DateCheck::InTheFuture(date),
        Some(date) => DateCheck::Valid(date),
        None => DateCheck::Invalid,
    }
}

/// Render a date the way todo.txt stores it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local clock.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
