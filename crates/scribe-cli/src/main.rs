//! scribe CLI
//!
//! Line-oriented edits of text files from the command line, and declarative
//! edit plans that combine file edits with shell commands.

mod cli;
mod commands;
mod error;
mod plan;

use clap::Parser;
use colored::Colorize;
use scribe_exec::Runner;
use scribe_text::Pattern;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, pattern};
use error::Result;
use plan::Edit;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Run the CLI, returning the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Insert {
            file,
            lines,
            locator,
            regex,
        } => {
            let locator = locator.to_options(regex)?.into_locator()?;
            commands::run_edit(&file, &Edit::Insert { lines, locator })?;
        }
        Commands::Delete {
            file,
            patterns,
            every,
            regex,
        } => {
            let mut patterns = patterns
                .iter()
                .map(|p| pattern(p, regex))
                .collect::<Result<Vec<Pattern>>>()?;
            let edit = if patterns.len() == 1 {
                Edit::DeleteLine {
                    pattern: patterns.remove(0),
                    every,
                }
            } else {
                Edit::DeleteBlock {
                    block: patterns,
                    every,
                }
            };
            commands::run_edit(&file, &edit)?;
        }
        Commands::Replace {
            file,
            pattern: search,
            replacement,
            regex,
        } => {
            let edit = Edit::Replace {
                pattern: pattern(&search, regex)?,
                with: replacement,
            };
            commands::run_edit(&file, &edit)?;
        }
        Commands::Append { file, lines } => {
            commands::run_edit(&file, &Edit::Append { lines })?;
        }
        Commands::Contains {
            file,
            pattern: search,
            regex,
        } => {
            if !commands::run_contains(&file, &pattern(&search, regex)?)? {
                return Ok(1);
            }
        }
        Commands::Apply { plan, dry_run } => {
            let mut runner = Runner::new();
            commands::run_apply(&plan, dry_run, &mut runner)?;
        }
    }
    Ok(0)
}

/// Log to stderr. `--verbose` forces DEBUG; otherwise `RUST_LOG` applies,
/// defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if verbose && initialized.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}
