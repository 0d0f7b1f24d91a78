//! The structured form of one todo.txt line.
//!
//! A [`TodoTxtTask`] is produced by [`crate::parser::TodoTxtParser`] but can
//! also be assembled by hand with the `with_*` builders. Either way,
//! [`TodoTxtTask::render`] writes it back as a todo.txt line.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::format_date;

/// A todo.txt priority: one uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Priority(char);

/// Returned when a character outside `A`-`Z` is used as a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid priority '{0}': expected a letter from A to Z")]
pub struct InvalidPriority(pub char);

impl Priority {
    /// Create a priority, rejecting anything but `A`-`Z`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPriority` for lowercase letters, digits and symbols.
    pub const fn new(letter: char) -> Result<Self, InvalidPriority> {
        if letter.is_ascii_uppercase() {
            Ok(Self(letter))
        } else {
            Err(InvalidPriority(letter))
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Priority {
    type Error = InvalidPriority;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::new(letter)
    }
}

impl From<Priority> for char {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed or hand-built todo.txt task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoTxtTask {
    #[serde(default)]
    original_text: String,
    #[serde(default)]
    clean_text: String,
    #[serde(default)]
    created_at: Option<NaiveDate>,
    /// Keyed metadata such as `due:2016-12-24`, in first-seen order.
    #[serde(default)]
    add_ons: IndexMap<String, String>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    projects: Vec<String>,
    #[serde(default)]
    contexts: Vec<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completed_at: Option<NaiveDate>,
}

/// Export shape of a task: every field plus its canonical rendering.
#[derive(Debug, Serialize)]
pub struct TaskView<'a> {
    #[serde(flatten)]
    task: &'a TodoTxtTask,
    string: String,
}

impl TodoTxtTask {
    /// Create a task with only a description.
    #[must_use]
    pub fn new(clean_text: impl Into<String>) -> Self {
        Self {
            clean_text: clean_text.into(),
            ..Self::default()
        }
    }

    // ===========
    // Accessors
    // ===========

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[must_use]
    pub fn clean_text(&self) -> &str {
        &self.clean_text
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<NaiveDate> {
        self.created_at
    }

    #[must_use]
    pub const fn completed_at(&self) -> Option<NaiveDate> {
        self.completed_at
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    #[must_use]
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    #[must_use]
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    #[must_use]
    pub const fn add_ons(&self) -> &IndexMap<String, String> {
        &self.add_ons
    }

    /// Value of a single add-on, if present.
    #[must_use]
    pub fn add_on(&self, key: &str) -> Option<&str> {
        self.add_ons.get(key).map(String::as_str)
    }

    // ===========
    // Mutators
    // ===========

    pub fn set_original_text(&mut self, text: impl Into<String>) {
        self.original_text = text.into();
    }

    pub fn set_clean_text(&mut self, text: impl Into<String>) {
        self.clean_text = text.into();
    }

    pub fn set_created_at(&mut self, date: Option<NaiveDate>) {
        self.created_at = date;
    }

    /// Set or clear the completion date; `completed` follows it.
    pub fn set_completed_at(&mut self, date: Option<NaiveDate>) {
        self.completed = date.is_some();
        self.completed_at = date;
    }

    /// Mark the task done on `date`.
    pub fn complete(&mut self, date: NaiveDate) {
        self.set_completed_at(Some(date));
    }

    /// Mark the task open again, dropping its completion date.
    pub fn reopen(&mut self) {
        self.set_completed_at(None);
    }

    /// Set the completion marker alone. Used while a line is scanned, before
    /// its completion date has been seen.
    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
    }

    /// Add a project unless it is already present.
    pub fn add_project(&mut self, project: impl Into<String>) {
        push_unique(&mut self.projects, project.into());
    }

    /// Add a context unless it is already present.
    pub fn add_context(&mut self, context: impl Into<String>) {
        push_unique(&mut self.contexts, context.into());
    }

    /// Insert an add-on, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert_add_on(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.add_ons.insert(key.into(), value.into())
    }

    // ==========
    // Builders
    // ==========

    #[must_use]
    pub fn with_original_text(mut self, text: impl Into<String>) -> Self {
        self.set_original_text(text);
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    #[must_use]
    pub fn with_completed_at(mut self, date: NaiveDate) -> Self {
        self.complete(date);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects.clear();
        for project in projects {
            self.add_project(project);
        }
        self
    }

    #[must_use]
    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts.clear();
        for context in contexts {
            self.add_context(context);
        }
        self
    }

    #[must_use]
    pub fn with_add_on(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_add_on(key, value);
        self
    }

    // ===========
    // Rendering
    // ===========

    /// Rebuild a todo.txt line from the fields.
    ///
    /// Order: completion marker and date, priority, created-at date,
    /// description, then add-ons. Tags are not regenerated; they live in the
    /// description already.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.completed {
            parts.push("x".to_string());
            if let Some(date) = self.completed_at {
                parts.push(format_date(date));
            }
        }

        if let Some(priority) = self.priority {
            parts.push(format!("({priority})"));
        }

        if let Some(date) = self.created_at {
            parts.push(format_date(date));
        }

        parts.push(self.clean_text.clone());

        for (key, value) in &self.add_ons {
            parts.push(format!("{key}:{value}"));
        }

        parts.join(" ")
    }

    /// Serializable view including the rendered line under `string`.
    #[must_use]
    pub fn view(&self) -> TaskView<'_> {
        TaskView {
            task: self,
            string: self.render(),
        }
    }
}

impl std::fmt::Display for TodoTxtTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn prio(letter: char) -> Priority {
        Priority::new(letter).unwrap()
    }

    // ===============
    // Priority Tests
    // ===============

    #[test]
    fn test_priority_accepts_uppercase() {
        assert_eq!(prio('A').letter(), 'A');
        assert_eq!(prio('Z').to_string(), "Z");
    }

    #[test]
    fn test_priority_rejects_others() {
        assert_eq!(Priority::new('a'), Err(InvalidPriority('a')));
        assert!(Priority::new('1').is_err());
        assert!(Priority::try_from('(').is_err());
    }

    #[test]
    fn test_priority_serde() {
        assert_eq!(serde_json::to_string(&prio('B')).unwrap(), "\"B\"");
        assert_eq!(serde_json::from_str::<Priority>("\"C\"").unwrap(), prio('C'));
        assert!(serde_json::from_str::<Priority>("\"c\"").is_err());
    }

    // ================
    // Rendering Tests
    // ================

    #[test]
    fn test_render_description_only() {
        assert_eq!(TodoTxtTask::new("Test string 1").render(), "Test string 1");
    }

    #[test]
    fn test_render_created_at() {
        let task = TodoTxtTask::new("Test string 2").with_created_at(date(2015, 11, 22));
        assert_eq!(task.render(), "2015-11-22 Test string 2");
    }

    #[test]
    fn test_render_completed() {
        let task = TodoTxtTask::new("Test string 3")
            .with_created_at(date(2015, 11, 22))
            .with_completed_at(date(2015, 12, 23));
        assert_eq!(task.render(), "x 2015-12-23 2015-11-22 Test string 3");
    }

    #[test]
    fn test_render_completed_with_priority() {
        let task = TodoTxtTask::new("Test string 4")
            .with_created_at(date(2015, 11, 22))
            .with_priority(prio('A'))
            .with_completed_at(date(2015, 12, 23));
        assert_eq!(task.render(), "x 2015-12-23 (A) 2015-11-22 Test string 4");
    }

    #[test]
    fn test_render_keeps_tags_in_description() {
        let task = TodoTxtTask::new("Test string 5 @has +filter")
            .with_projects(["filter"])
            .with_contexts(["has"])
            .with_created_at(date(2015, 11, 22))
            .with_priority(prio('A'))
            .with_completed_at(date(2015, 12, 23));
        assert_eq!(
            task.render(),
            "x 2015-12-23 (A) 2015-11-22 Test string 5 @has +filter"
        );
    }

    #[test]
    fn test_render_add_ons_last() {
        let task = TodoTxtTask::new("Test string 5 @has +filter")
            .with_add_on("foo", "bar")
            .with_projects(["filter"])
            .with_contexts(["has"])
            .with_created_at(date(2015, 11, 22))
            .with_priority(prio('A'))
            .with_completed_at(date(2015, 12, 23));
        assert_eq!(
            task.render(),
            "x 2015-12-23 (A) 2015-11-22 Test string 5 @has +filter foo:bar"
        );
    }

    #[test]
    fn test_render_add_ons_in_insertion_order() {
        let task = TodoTxtTask::new("ship it")
            .with_add_on("due", "2016-12-24")
            .with_add_on("type", "several");
        assert_eq!(task.render(), "ship it due:2016-12-24 type:several");
    }

    #[test]
    fn test_display_matches_render() {
        let task = TodoTxtTask::new("call mom").with_priority(prio('B'));
        assert_eq!(task.to_string(), "(B) call mom");
    }

    // =================
    // Completion Tests
    // =================

    #[test]
    fn test_completed_follows_completed_at() {
        let mut task = TodoTxtTask::new("task");
        assert!(!task.is_completed());

        task.complete(date(2016, 1, 1));
        assert!(task.is_completed());
        assert_eq!(task.completed_at(), Some(date(2016, 1, 1)));

        task.reopen();
        assert!(!task.is_completed());
        assert_eq!(task.completed_at(), None);
        assert_eq!(task.render(), "task");
    }

    // ==========================
    // Tag and Add-on Tests
    // ==========================

    #[test]
    fn test_tags_are_deduplicated() {
        let task = TodoTxtTask::new("x")
            .with_contexts(["same", "same", "context"])
            .with_projects(["dub", "dub", "project"]);
        assert_eq!(task.contexts(), ["same", "context"]);
        assert_eq!(task.projects(), ["dub", "project"]);
    }

    #[test]
    fn test_insert_add_on_returns_previous() {
        let mut task = TodoTxtTask::new("x");
        assert_eq!(task.insert_add_on("due", "2016-01-01"), None);
        assert_eq!(
            task.insert_add_on("due", "2016-02-02"),
            Some("2016-01-01".to_string())
        );
        assert_eq!(task.add_on("due"), Some("2016-02-02"));
        assert_eq!(task.add_on("missing"), None);
    }

    // =============
    // Export Tests
    // =============

    #[test]
    fn test_view_json_shape() {
        let task = TodoTxtTask::new("Test string 5 @has +filter")
            .with_add_on("foo", "bar")
            .with_projects(["filter"])
            .with_contexts(["has"])
            .with_created_at(date(2015, 11, 22))
            .with_priority(prio('A'))
            .with_completed_at(date(2015, 12, 23));

        let json = serde_json::to_value(task.view()).unwrap();
        assert_eq!(json["cleanText"], "Test string 5 @has +filter");
        assert_eq!(json["createdAt"], "2015-11-22");
        assert_eq!(json["completedAt"], "2015-12-23");
        assert_eq!(json["completed"], true);
        assert_eq!(json["priority"], "A");
        assert_eq!(json["projects"], serde_json::json!(["filter"]));
        assert_eq!(json["contexts"], serde_json::json!(["has"]));
        assert_eq!(json["addOns"]["foo"], "bar");
        assert_eq!(
            json["string"],
            "x 2015-12-23 (A) 2015-11-22 Test string 5 @has +filter foo:bar"
        );
    }

    #[test]
    fn test_view_json_empty_fields() {
        let json = serde_json::to_value(TodoTxtTask::new("Test string 1").view()).unwrap();
        assert_eq!(json["createdAt"], serde_json::Value::Null);
        assert_eq!(json["priority"], serde_json::Value::Null);
        assert_eq!(json["completed"], false);
        assert_eq!(json["string"], "Test string 1");
    }

    #[test]
    fn test_task_deserializes_from_export() {
        let task = TodoTxtTask::new("pay rent")
            .with_created_at(date(2016, 1, 1))
            .with_add_on("due", "2016-02-01");
        let json = serde_json::to_string(&task.view()).unwrap();
        let back: TodoTxtTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
