//! Line ending conversion at the file boundary.
//!
//! Documents only ever see `\n`. Files are normalized on load and written
//! back with the platform line ending.

use std::borrow::Cow;

#[cfg(windows)]
pub const NATIVE: &str = "\r\n";
#[cfg(not(windows))]
pub const NATIVE: &str = "\n";

/// Convert CRLF and lone CR to `\n`.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Convert `\n` to the platform line ending.
pub fn restore(text: &str) -> Cow<'_, str> {
    convert(text, NATIVE)
}

/// Convert `\n` to `eol`.
pub fn convert<'a>(text: &'a str, eol: &str) -> Cow<'a, str> {
    if eol == "\n" || !text.contains('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replace('\n', eol))
    }
}
