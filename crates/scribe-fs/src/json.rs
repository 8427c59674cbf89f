//! JSON round trip preserving the file's indentation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::Error;
use crate::{io, line_endings};

/// Leading whitespace of the first indented line.
static INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^([ \t]+)\S").unwrap());

/// Indentation used by `text`, taken from its first indented line.
pub fn detect_indent(text: &str) -> Option<&str> {
    INDENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Serialize `value` with `indent`, or compactly when there is none.
pub fn to_string_with_indent(value: &Value, indent: Option<&str>) -> serde_json::Result<String> {
    let Some(indent) = indent else {
        return serde_json::to_string(value);
    };

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse `path` as JSON, let `edit` mutate the value, and write it back if
/// the re-serialized text differs from the original.
///
/// The original indentation is reused and a trailing newline is kept.
pub fn edit_json<F, E>(path: impl AsRef<Path>, edit: F) -> std::result::Result<bool, E>
where
    F: FnOnce(&mut Value) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let path = path.as_ref();
    let raw = io::read_text(path)?;
    let original = line_endings::normalize(&raw);

    let mut value: Value =
        serde_json::from_str(&original).map_err(|e| Error::parse(path, "JSON", e))?;
    edit(&mut value)?;

    let mut serialized = to_string_with_indent(&value, detect_indent(&original))
        .map_err(|e| Error::serialize(path, "JSON", e))?;
    if original.ends_with('\n') {
        serialized.push('\n');
    }

    if serialized == original {
        debug!(path = %path.display(), "JSON unchanged");
        return Ok(false);
    }
    io::write_text(path, &line_endings::restore(&serialized))?;
    Ok(true)
}
