//! Multi-file edits over a [`FileSet`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use scribe_text::LineDocument;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::glob::{CompiledFileSet, FileSet};
use crate::text::{read_document, save_if_modified};

/// List files under `root` selected by `set`'s include and exclude globs, in
/// sorted order. The `containing` filter is not applied.
pub fn find_files(root: impl AsRef<Path>, set: &FileSet) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let compiled = set.compile()?;
    let mut found = Vec::new();
    walk_dir(root, root, &compiled, &mut found)?;
    Ok(found)
}

fn walk_dir(root: &Path, dir: &Path, set: &CompiledFileSet, found: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            walk_dir(root, &path, set, found)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if set.selects(relative) {
                found.push(path);
            }
        }
    }
    Ok(())
}

/// Apply `edit` to every file under `root` selected by `set`, writing back the
/// ones that changed. Returns the changed paths.
///
/// Files that do not contain `set.containing` are skipped without calling
/// `edit`, as are files that are not valid UTF-8.
pub fn edit_files<F, E>(root: impl AsRef<Path>, set: &FileSet, mut edit: F) -> std::result::Result<Vec<PathBuf>, E>
where
    F: FnMut(&Path, &mut LineDocument) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let mut changed = Vec::new();
    for path in find_files(root, set)? {
        let Some(mut doc) = load(&path)? else {
            continue;
        };
        if !selected(&path, &doc, set) {
            continue;
        }
        edit(&path, &mut doc)?;
        if save_if_modified(&path, &doc)? {
            changed.push(path);
        }
    }

    debug!(changed = changed.len(), "multi-file edit finished");
    Ok(changed)
}

/// Like [`edit_files`] but never writes. Returns the paths that would change.
pub fn preview_files<F, E>(root: impl AsRef<Path>, set: &FileSet, edit: F) -> std::result::Result<Vec<PathBuf>, E>
where
    F: FnMut(&Path, &mut LineDocument) -> std::result::Result<(), E>,
    E: From<Error>,
{
    Preview::new().edit_files(root, set, edit)
}

/// In-memory documents shared by several preview passes.
///
/// A file edited by one pass is seen by the next pass as edited, so a
/// sequence of passes previews the same result a sequence of
/// [`edit_files`] calls would write.
#[derive(Debug, Default)]
pub struct Preview {
    documents: BTreeMap<PathBuf, LineDocument>,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `edit` to the in-memory copy of every selected file. Returns the
    /// selected paths whose document now differs from the file on disk.
    pub fn edit_files<F, E>(&mut self, root: impl AsRef<Path>, set: &FileSet, mut edit: F) -> std::result::Result<Vec<PathBuf>, E>
    where
        F: FnMut(&Path, &mut LineDocument) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let mut changed = Vec::new();
        for path in find_files(root, set)? {
            let mut doc = match self.documents.remove(&path) {
                Some(doc) => doc,
                None => match load(&path)? {
                    Some(doc) => doc,
                    None => continue,
                },
            };
            if selected(&path, &doc, set) {
                edit(&path, &mut doc)?;
                if doc.is_modified() {
                    changed.push(path.clone());
                }
            }
            self.documents.insert(path, doc);
        }

        debug!(changed = changed.len(), "multi-file preview finished");
        Ok(changed)
    }

    /// Every previewed path whose document differs from the file on disk, in
    /// sorted order.
    pub fn changed(&self) -> Vec<PathBuf> {
        self.documents
            .iter()
            .filter(|(_, doc)| doc.is_modified())
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// The previewed document for `path`, if a pass has loaded it.
    pub fn document(&self, path: impl AsRef<Path>) -> Option<&LineDocument> {
        self.documents.get(path.as_ref())
    }
}

/// Load `path`, or `None` when it is not UTF-8 text.
fn load(path: &Path) -> Result<Option<LineDocument>> {
    match read_document(path) {
        Ok(doc) => Ok(Some(doc)),
        Err(Error::Io { source, .. }) if source.kind() == ErrorKind::InvalidData => {
            trace!(path = %path.display(), "skipped, not UTF-8 text");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn selected(path: &Path, doc: &LineDocument, set: &FileSet) -> bool {
    if let Some(pattern) = &set.containing
        && !doc.contains(pattern)
    {
        trace!(path = %path.display(), %pattern, "skipped, pattern not found");
        return false;
    }
    true
}
