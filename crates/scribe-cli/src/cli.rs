//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scribe_text::{LocatorOptions, Pattern};

use crate::error::Result;

/// scribe - line-oriented file edits and edit plans
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert lines into a file
    ///
    /// Several lines are inserted as one contiguous block at each target.
    ///
    /// Examples:
    ///   scribe insert notes.txt "new last line" --at=-1
    ///   scribe insert src/lib.rs "#![deny(unsafe_code)]" --at 0
    ///   scribe insert Cargo.toml 'serde = "1"' --below "[dependencies]"
    Insert {
        /// File to edit
        file: PathBuf,

        /// Lines to insert
        #[arg(required = true)]
        lines: Vec<String>,

        #[command(flatten)]
        locator: LocatorArgs,

        /// Treat patterns as regular expressions
        #[arg(long)]
        regex: bool,
    },

    /// Delete a line, or a block of lines when several patterns are given
    Delete {
        /// File to edit
        file: PathBuf,

        /// One pattern per line of the block
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Delete every match instead of the first
        #[arg(long)]
        every: bool,

        /// Treat patterns as regular expressions
        #[arg(long)]
        regex: bool,
    },

    /// Replace every occurrence of a pattern across the whole file
    Replace {
        /// File to edit
        file: PathBuf,

        /// Text to search for
        pattern: String,

        /// Replacement text (`$1` expands groups with --regex)
        replacement: String,

        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Append lines to the end of a file
    Append {
        /// File to edit
        file: PathBuf,

        /// Lines to append
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Exit successfully if the file contains the pattern
    Contains {
        /// File to search
        file: PathBuf,

        /// Text to search for
        pattern: String,

        /// Treat the pattern as a regular expression
        #[arg(long)]
        regex: bool,
    },

    /// Apply an edit plan (TOML, JSON or YAML)
    Apply {
        /// Plan file
        plan: PathBuf,

        /// Report files that would change without writing them
        #[arg(long)]
        dry_run: bool,
    },
}

/// Where `insert` places its lines. Exactly one must be given.
#[derive(Args, Debug, Clone, Default)]
pub struct LocatorArgs {
    /// Insert before this line index; negative counts from the end
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<isize>,

    /// Insert above the first matching line
    #[arg(long)]
    pub above: Option<String>,

    /// Insert below the first matching line
    #[arg(long)]
    pub below: Option<String>,

    /// Insert above every matching line
    #[arg(long)]
    pub above_every: Option<String>,

    /// Insert below every matching line
    #[arg(long)]
    pub below_every: Option<String>,
}

impl LocatorArgs {
    pub fn to_options(&self, regex: bool) -> Result<LocatorOptions> {
        let convert = |value: &Option<String>| {
            value
                .as_deref()
                .map(|text| pattern(text, regex))
                .transpose()
        };
        Ok(LocatorOptions {
            at: self.at,
            above: convert(&self.above)?,
            below: convert(&self.below)?,
            above_every: convert(&self.above_every)?,
            below_every: convert(&self.below_every)?,
        })
    }
}

/// Build a pattern from command-line text.
pub fn pattern(text: &str, regex: bool) -> Result<Pattern> {
    if regex {
        Ok(Pattern::regex(text)?)
    } else {
        Ok(Pattern::literal(text))
    }
}
