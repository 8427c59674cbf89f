//! YAML round trip.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{io, line_endings};

/// Parse `path` as YAML, let `edit` mutate the value, and write it back if the
/// value changed.
///
/// The value is a plain [`serde_yaml::Value`], which does not keep comments
/// or formatting. A changed document is written back without its comments
/// and with serde_yaml's layout; an unchanged one is never rewritten.
pub fn edit_yaml<F, E>(path: impl AsRef<Path>, edit: F) -> std::result::Result<bool, E>
where
    F: FnOnce(&mut Value) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    let raw = io::read_text(path)?;
    let original: Value = serde_yaml::from_str(&line_endings::normalize(&raw))
        .map_err(|e| Error::parse(path, "YAML", e))?;

    let mut value = original.clone();
    edit(&mut value)?;

    if value == original {
        debug!(path = %path.display(), "YAML unchanged");
        return Ok(false);
    }
    let serialized = serde_yaml::to_string(&value).map_err(|e| Error::serialize(path, "YAML", e))?;
    io::write_text(path, &line_endings::restore(&serialized))?;
    Ok(true)
}

/// Parse `path` as YAML.
pub fn read_yaml(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let raw = io::read_text(path)?;
    serde_yaml::from_str(&line_endings::normalize(&raw)).map_err(|e| Error::parse(path, "YAML", e))
}
