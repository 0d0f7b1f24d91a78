use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG_ENV;
use crate::core::parse_date;
use crate::validation::ErrorKind;

#[derive(Parser, Debug)]
#[command(name = "todotxt")]
#[command(about = "Parse, validate and normalize todo.txt task lines")]
#[command(long_about = "todotxt - parse, validate and normalize todo.txt task lines

Reads lines in the todo.txt format, checks them, and prints either the
structured task or every problem found in the line.

QUICK START:
  todotxt parse \"(A) 2016-01-02 call mom @phone due:2016-01-05\"
  todotxt parse < todo.txt              Check a whole file
  todotxt format < todo.txt             Print canonical lines
  todotxt -o json parse \"buy milk\"      Machine-readable output

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Leave an error kind out of every report (repeatable)
    ///
    /// Added to the `parser.ignore` list from the config file.
    #[arg(long = "ignore", value_enum, global = true, value_name = "KIND")]
    pub ignore: Vec<ErrorKind>,

    /// Reference date for future-date checks (YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_parser = parse_date_arg, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Path to the config file
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse lines and show the structured tasks
    ///
    /// Parses TEXT, or every non-blank line of stdin when TEXT is omitted.
    /// Exits with status 1 if any line fails validation.
    ///
    /// # Examples
    ///
    ///   todotxt parse "x 2016-01-03 (A) 2016-01-02 done @home"
    ///   todotxt parse --ignore created-at-in-the-future < todo.txt
    ///   todotxt -o json parse "due:2016-12-24 wrap gifts +xmas"
    #[command(alias = "p")]
    Parse(InputArgs),

    /// Print lines in canonical todo.txt order
    ///
    /// Each line is parsed and written back as
    /// `x <done> (P) <created> <description> <key:value...>`.
    /// Lines that fail validation are reported on stderr.
    ///
    /// # Examples
    ///
    ///   todotxt format "call mom due:2016-01-05 (A)"
    ///   todotxt format < todo.txt > todo.clean.txt
    #[command(alias = "f")]
    Format(InputArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Input selection shared by the line-processing commands.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// A single todo.txt line; read stdin when omitted
    pub text: Option<String>,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("'{value}' is not a YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_text() {
        let cli = Cli::try_parse_from(["todotxt", "parse", "buy milk"]).unwrap();
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.text.as_deref(), Some("buy milk")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.output.is_none());
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_cli_parse_stdin() {
        let cli = Cli::try_parse_from(["todotxt", "parse"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse(InputArgs { text: None })));
    }

    #[test]
    fn test_cli_output_format_short() {
        let cli = Cli::try_parse_from(["todotxt", "-o", "json", "parse", "x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "todotxt",
            "format",
            "--ignore",
            "duplicate-add-on-key",
            "--ignore",
            "completed-at-missing",
            "--today",
            "2016-01-10",
        ])
        .unwrap();
        assert_eq!(
            cli.ignore,
            vec![ErrorKind::DuplicateAddOnKey, ErrorKind::CompletedAtMissing]
        );
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2016, 1, 10));
    }

    #[test]
    fn test_cli_rejects_bad_today() {
        assert!(Cli::try_parse_from(["todotxt", "--today", "2016-02-30", "parse"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["todotxt", "--ignore", "nope", "parse"]).is_err());
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["todotxt", "-vv", "parse"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["todotxt", "completions", "zsh"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Zsh }));
    }

    #[test]
    fn test_cli_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["todotxt", "p", "a"]).unwrap().command,
            Commands::Parse(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["todotxt", "f", "a"]).unwrap().command,
            Commands::Format(_)
        ));
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
