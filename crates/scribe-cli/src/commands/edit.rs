//! Single-file edit commands

use std::path::Path;

use colored::Colorize;
use scribe_text::Pattern;

use crate::error::{CliError, Result};
use crate::plan::Edit;

/// Apply `edit` to `file`, reporting whether it changed.
pub fn run_edit(file: &Path, edit: &Edit) -> Result<bool> {
    let changed = scribe_fs::edit_file(file, |doc| {
        edit.apply(doc)?;
        Ok::<_, CliError>(())
    })?;

    if changed {
        println!("{} {}", "updated".green().bold(), file.display());
    } else {
        println!("{} {}", "unchanged".dimmed(), file.display());
    }
    Ok(changed)
}

/// Whether `file` contains `pattern`.
pub fn run_contains(file: &Path, pattern: &Pattern) -> Result<bool> {
    let doc = scribe_fs::read_document(file)?;
    Ok(doc.contains(pattern))
}
