//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoTxtError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TodoTxtError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "todotxt", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| TodoTxtError::InvalidArgument(format!("completion script is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("todotxt"));
        assert!(script.contains("parse"));
    }

    #[test]
    fn test_generate_fish() {
        let script = generate_completions(Shell::Fish).unwrap();
        assert!(script.contains("complete -c todotxt"));
    }
}
