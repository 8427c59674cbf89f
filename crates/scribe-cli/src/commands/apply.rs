//! Apply command implementation
//!
//! Runs every step of an edit plan in order. All operations are validated
//! before any file is touched, so a malformed plan changes nothing.

use std::path::{Path, PathBuf};

use colored::Colorize;
use scribe_exec::{RunOptions, Runner};
use scribe_fs::{ConfigStore, FileSet, Preview};
use scribe_text::LineDocument;
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::plan::{Edit, Plan, Step};

/// What a plan run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Files written, or that would be written in a dry run, each listed once
    pub changed: Vec<PathBuf>,
    /// Commands executed, or skipped in a dry run
    pub commands: Vec<String>,
}

/// A plan step with its operations validated.
enum Prepared {
    Edit { files: FileSet, edits: Vec<Edit> },
    Run { command: String, cwd: PathBuf },
}

/// Load the plan at `plan_path` and apply it.
pub fn run_apply(plan_path: &Path, dry_run: bool, runner: &mut Runner) -> Result<ApplyReport> {
    let plan: Plan = ConfigStore::new().load(plan_path)?;
    let base = match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let root = match &plan.root {
        Some(root) => base.join(root),
        None => base.to_path_buf(),
    };

    let report = apply_plan(plan, &root, dry_run, runner)?;
    print_report(&report, &root, dry_run);
    Ok(report)
}

/// Apply an already loaded plan with globs and commands relative to `root`.
pub fn apply_plan(plan: Plan, root: &Path, dry_run: bool, runner: &mut Runner) -> Result<ApplyReport> {
    let steps = plan
        .steps
        .into_iter()
        .map(|step| prepare(step, root))
        .collect::<Result<Vec<_>>>()?;

    let mut report = ApplyReport::default();
    let mut preview = Preview::new();
    for (index, step) in steps.into_iter().enumerate() {
        match step {
            Prepared::Edit { files, edits } => {
                debug!(step = index, edits = edits.len(), "edit step");
                let apply = |_: &Path, doc: &mut LineDocument| {
                    for edit in &edits {
                        edit.apply(doc)?;
                    }
                    Ok::<_, CliError>(())
                };
                if dry_run {
                    preview.edit_files(root, &files, apply)?;
                } else {
                    for path in scribe_fs::edit_files(root, &files, apply)? {
                        if !report.changed.contains(&path) {
                            report.changed.push(path);
                        }
                    }
                }
            }
            Prepared::Run { command, cwd } => {
                if dry_run {
                    info!(step = index, %command, "dry run, command skipped");
                } else {
                    let output = runner.run(&command, &RunOptions::new().cwd(cwd))?;
                    if !output.stdout.is_empty() {
                        print!("{}", output.stdout);
                    }
                }
                report.commands.push(command);
            }
        }
    }
    if dry_run {
        report.changed = preview.changed();
    }
    Ok(report)
}

fn prepare(step: Step, root: &Path) -> Result<Prepared> {
    match step {
        Step::Edit(edit) => {
            let edits = edit
                .ops
                .into_iter()
                .map(Edit::try_from)
                .collect::<Result<Vec<_>>>()?;
            let files = FileSet {
                include: edit.files,
                exclude: edit.exclude,
                containing: edit.containing,
            };
            Ok(Prepared::Edit { files, edits })
        }
        Step::Run(run) => {
            let cwd = match run.cwd {
                Some(cwd) => root.join(cwd),
                None => root.to_path_buf(),
            };
            Ok(Prepared::Run {
                command: run.command,
                cwd,
            })
        }
    }
}

fn print_report(report: &ApplyReport, root: &Path, dry_run: bool) {
    let verb = if dry_run { "would update" } else { "updated" };
    for path in &report.changed {
        let shown = path.strip_prefix(root).unwrap_or(path);
        println!("{} {}", verb.green().bold(), shown.display());
    }
    if dry_run {
        for command in &report.commands {
            println!("{} {}", "would run".yellow().bold(), command);
        }
    }
    if report.changed.is_empty() && report.commands.is_empty() {
        println!("{} Nothing to do.", "OK".green().bold());
    }
}
