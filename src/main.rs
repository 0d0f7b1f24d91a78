use std::io::Write;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use todotxt::cli::args::{Cli, Commands};
use todotxt::cli::commands::{self, CommandOutput, Context};
use todotxt::config::Config;
use todotxt::core::today;
use todotxt::parser::TodoTxtParser;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "todotxt=info",
        _ => "todotxt=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    config.general.color.apply();

    let mut parser = TodoTxtParser::from_config(&config.parser);
    for kind in cli.ignore {
        parser.ignore(kind);
    }

    let ctx = Context {
        parser,
        today: cli.today.unwrap_or_else(today),
        format: cli.output.unwrap_or(config.general.default_output),
    };

    let stdin = std::io::stdin();
    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&ctx, args.text, stdin.lock())?,
        Commands::Format(args) => commands::format(&ctx, args.text, stdin.lock())?,
        Commands::Completions { shell } => {
            CommandOutput::ok(commands::generate_completions(shell)?)
        }
    };

    emit(&output).context("writing output")?;
    Ok(output.success)
}

fn emit(output: &CommandOutput) -> std::io::Result<()> {
    if !output.stdout.is_empty() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output.stdout.trim_end())?;
    }
    if !output.stderr.is_empty() {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", output.stderr.trim_end())?;
    }
    Ok(())
}
