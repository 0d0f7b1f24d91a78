//! todotxt - a todo.txt line parser
//!
//! This crate parses single lines in the [todo.txt] format into structured
//! [`TodoTxtTask`] records, validates them, and renders records back into
//! canonical todo.txt lines.
//!
//! ```
//! use todotxt::{ErrorKind, TodoTxtParser};
//!
//! let mut parser = TodoTxtParser::new();
//! let task = parser
//!     .parse("x 2016-01-03 (A) 2016-01-02 call mom @phone +family")
//!     .unwrap();
//! assert!(task.is_completed());
//! assert_eq!(task.projects(), ["family"]);
//! assert_eq!(task.render(), "x 2016-01-03 (A) 2016-01-02 call mom @phone +family");
//!
//! let errors = parser.parse("test:one test:two clash").unwrap_err();
//! assert_eq!(errors.kinds(), vec![ErrorKind::DuplicateAddOnKey]);
//!
//! parser.ignore(ErrorKind::DuplicateAddOnKey);
//! let task = parser.parse("test:one test:two clash").unwrap();
//! assert_eq!(task.add_on("test"), Some("two"));
//! ```
//!
//! [todo.txt]: https://github.com/todotxt/todo.txt

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod task;
pub mod validation;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoTxtError;
pub use parser::TodoTxtParser;
pub use task::{Priority, TaskView, TodoTxtTask};
pub use validation::{ErrorKind, ValidationError, ValidationErrors};
