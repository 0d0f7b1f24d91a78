//! Token classification rules.
//!
//! Every token of a line is classified against a [`ScanState`] snapshot taken
//! just before it. Rules are tried in [`RULES`] order and the first match
//! wins; a token no rule claims is part of the description.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::is_date_token;
use crate::task::Priority;

// Compiled regex patterns
static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Z])\)$").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "@context" / "+project", hyphenated names allowed, trailing punctuation
    // kept out of the captured name
    Regex::new(r"^([@+])(\w+(?:-\w+)*)[!?.,:;&+\-]*$")
        .unwrap_or_else(|e| panic!("Invalid tag regex: {e}"))
});

static ADD_ON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Trailing punctuation is dropped along with the token
    Regex::new(r"^([A-Za-z]+):([\w-]+)[!?.,:;&+]*$")
        .unwrap_or_else(|e| panic!("Invalid add-on regex: {e}"))
});

/// What the scan has established before the token at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    /// Zero-based index of the token being classified.
    pub position: usize,
    /// At least one token has gone into the description.
    pub description_started: bool,
    pub completed: bool,
    pub has_created_at: bool,
    pub has_priority: bool,
}

/// Which side list a tag goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `@name`
    Context,
    /// `+name`
    Project,
}

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    CompletionMarker,
    /// Date-shaped token right after the completion marker.
    CompletedAt(&'a str),
    Priority(Priority),
    /// Date-shaped token ahead of the description.
    CreatedAt(&'a str),
    Tag { kind: TagKind, name: &'a str },
    AddOn { key: &'a str, value: &'a str },
    Description,
}

impl Token<'_> {
    /// Whether the raw token also belongs in the description.
    #[must_use]
    pub const fn is_description(&self) -> bool {
        matches!(self, Self::Tag { .. } | Self::Description)
    }
}

pub type Rule = for<'a> fn(&'a str, &ScanState) -> Option<Token<'a>>;

/// Rules in precedence order.
pub const RULES: [Rule; 6] = [completion_marker, completed_at, priority, created_at, tag, add_on];

/// Classify `token` with the first matching rule.
#[must_use]
pub fn classify<'a>(token: &'a str, state: &ScanState) -> Token<'a> {
    RULES
        .iter()
        .find_map(|rule| rule(token, state))
        .unwrap_or(Token::Description)
}

/// `x` as the very first token.
pub fn completion_marker<'a>(token: &'a str, state: &ScanState) -> Option<Token<'a>> {
    (token == "x" && state.position == 0 && !state.description_started)
        .then_some(Token::CompletionMarker)
}

/// A date in second place on a completed line.
pub fn completed_at<'a>(token: &'a str, state: &ScanState) -> Option<Token<'a>> {
    (state.position == 1 && state.completed && is_date_token(token))
        .then_some(Token::CompletedAt(token))
}

/// `(A)`..`(Z)` ahead of both the created-at date and the description.
pub fn priority<'a>(token: &'a str, state: &ScanState) -> Option<Token<'a>> {
    if state.has_priority || state.has_created_at || state.description_started {
        return None;
    }
    let caps = PRIORITY_PATTERN.captures(token)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    Priority::new(letter).ok().map(Token::Priority)
}

/// The first date ahead of the description.
pub fn created_at<'a>(token: &'a str, state: &ScanState) -> Option<Token<'a>> {
    (!state.description_started && !state.has_created_at && is_date_token(token))
        .then_some(Token::CreatedAt(token))
}

/// `@context` or `+project`, optionally followed by punctuation.
pub fn tag<'a>(token: &'a str, _state: &ScanState) -> Option<Token<'a>> {
    let caps = TAG_PATTERN.captures(token)?;
    let kind = match caps.get(1)?.as_str() {
        "@" => TagKind::Context,
        _ => TagKind::Project,
    };
    let name = caps.get(2)?.as_str();
    Some(Token::Tag { kind, name })
}

/// `key:value` metadata, optionally followed by punctuation.
pub fn add_on<'a>(token: &'a str, _state: &ScanState) -> Option<Token<'a>> {
    let caps = ADD_ON_PATTERN.captures(token)?;
    Some(Token::AddOn {
        key: caps.get(1)?.as_str(),
        value: caps.get(2)?.as_str(),
    })
}
