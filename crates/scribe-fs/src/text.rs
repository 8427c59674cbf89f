//! Plain text round trip through a [`LineDocument`].

use std::path::Path;

use scribe_text::LineDocument;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{io, line_endings};

/// Load `path` as a document with `\n` line endings.
pub fn read_document(path: impl AsRef<Path>) -> Result<LineDocument> {
    let raw = io::read_text(path.as_ref())?;
    Ok(LineDocument::new(line_endings::normalize(&raw)))
}

/// Load `path`, let `edit` mutate it, and write it back if it changed.
///
/// Returns whether the file was written. The file keeps its content
/// byte-for-byte when `edit` leaves the document unmodified.
pub fn edit_file<F, E>(path: impl AsRef<Path>, edit: F) -> std::result::Result<bool, E>
where
    F: FnOnce(&mut LineDocument) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    let mut doc = read_document(path)?;
    edit(&mut doc)?;
    Ok(save_if_modified(path, &doc)?)
}

/// Write `doc` back to `path` with platform line endings if it was modified.
pub(crate) fn save_if_modified(path: &Path, doc: &LineDocument) -> Result<bool> {
    if !doc.is_modified() {
        debug!(path = %path.display(), "unchanged, not writing");
        return Ok(false);
    }
    io::write_text(path, &line_endings::restore(doc.text()))?;
    debug!(path = %path.display(), "written");
    Ok(true)
}
