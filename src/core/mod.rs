//! Core utilities shared by the parser and the task record.

mod datetime;

pub use datetime::{check_date, format_date, is_date_token, parse_date, today, DateCheck, DATE_FORMAT};
