//! Configuration management for todotxt.
//!
//! This module handles loading and saving configuration from `~/.todotxt/`.

mod paths;
mod settings;

pub use paths::{Paths, CONFIG_ENV};
pub use settings::{ColorSetting, Config, GeneralConfig, ParserConfig};
