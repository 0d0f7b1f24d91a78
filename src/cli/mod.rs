//! Command-line interface for todotxt.

pub mod args;
pub mod commands;
