//! Path resolution for todotxt configuration.
//!
//! Configuration lives in `~/.todotxt/`:
//! - `config.yaml` - Main configuration file
//!
//! `TODOTXT_CONFIG` overrides the config file location.

use std::path::PathBuf;

use crate::error::TodoTxtError;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "TODOTXT_CONFIG";

/// Paths to todotxt configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.todotxt/`
    pub root: PathBuf,
    /// Config file: `~/.todotxt/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoTxtError> {
        let home = std::env::var("HOME").map_err(|_| {
            TodoTxtError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".todotxt")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Resolve the config file: `TODOTXT_CONFIG` if set, else the default.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the variable nor `HOME` is set.
    pub fn config_file() -> Result<PathBuf, TodoTxtError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::new()?.config_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-todotxt");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
