//! Line document model
//!
//! The document owns `\n`-normalized text. Its lines are the text split on
//! `\n` with no special casing of a trailing break, so `"a\n"` has the lines
//! `["a", ""]` and joining the lines with `\n` always yields the text again.
//!
//! Every mutation works on a fresh copy of the lines and writes the text
//! back only when it succeeds, so a failed operation leaves the document
//! untouched.

use tracing::debug;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::pattern::Pattern;

/// A mutable text document addressed by line.
#[derive(Debug, Clone, Default)]
pub struct LineDocument {
    text: String,
    original: String,
}

impl LineDocument {
    /// Create a document from `\n`-normalized text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original: text.clone(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Whether the text differs from the text the document was created with.
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// True if `pattern` occurs anywhere in the text.
    pub fn contains(&self, pattern: &Pattern) -> bool {
        pattern.anywhere().is_match(&self.text)
    }

    /// Replace every match of `pattern` across the whole text in one pass.
    ///
    /// Matching is not line-by-line, so a literal containing `\n` can span
    /// several lines.
    pub fn replace_all(&mut self, pattern: &Pattern, replacement: &str) {
        let replaced = pattern.global().replace(&self.text, replacement).into_owned();
        debug!(%pattern, changed = replaced != self.text, "replace_all");
        self.text = replaced;
    }

    /// Replace the first line matching `pattern` with `line`.
    pub fn replace_line(&mut self, pattern: &Pattern, line: &str) -> Result<()> {
        let mut lines = self.owned_lines();
        let index = first_match(&lines, pattern).ok_or_else(|| Error::no_match(pattern))?;
        lines[index] = line.to_string();
        self.store(lines);
        Ok(())
    }

    /// Insert a single line at `locator`.
    ///
    /// `line` may itself contain `\n`; it is inserted as one contiguous block
    /// at every target.
    pub fn insert_line(&mut self, line: &str, locator: &Locator) -> Result<()> {
        let mut lines = self.owned_lines();

        match locator {
            Locator::At(at) => {
                let index = resolve_index(*at, lines.len());
                lines.insert(index, line.to_string());
            }
            Locator::Above(pattern) => {
                let index = first_match(&lines, pattern).ok_or_else(|| Error::no_match(pattern))?;
                lines.insert(index, line.to_string());
            }
            Locator::Below(pattern) => {
                let index = first_match(&lines, pattern).ok_or_else(|| Error::no_match(pattern))?;
                lines.insert(index + 1, line.to_string());
            }
            Locator::AboveEvery(pattern) => {
                let targets = matching_indices(&lines, pattern);
                debug!(%pattern, targets = targets.len(), "insert above every match");
                // Each earlier insertion shifts the remaining targets down by one.
                for (inserted, index) in targets.into_iter().enumerate() {
                    lines.insert(index + inserted, line.to_string());
                }
            }
            Locator::BelowEvery(pattern) => {
                let targets = matching_indices(&lines, pattern);
                debug!(%pattern, targets = targets.len(), "insert below every match");
                for (inserted, index) in targets.into_iter().enumerate() {
                    lines.insert(index + inserted + 1, line.to_string());
                }
            }
        }

        self.store(lines);
        Ok(())
    }

    /// Insert `lines` as one contiguous block at `locator`. Empty input is a
    /// no-op.
    pub fn insert_lines<S: AsRef<str>>(&mut self, lines: &[S], locator: &Locator) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        let block = join(lines);
        self.insert_line(&block, locator)
    }

    /// Delete the first line containing a match for `pattern`.
    pub fn delete_line(&mut self, pattern: &Pattern) -> Result<()> {
        let mut lines = self.owned_lines();
        let index = first_match(&lines, pattern).ok_or_else(|| Error::no_match(pattern))?;
        lines.remove(index);
        self.store(lines);
        Ok(())
    }

    /// Delete every line containing a match for `pattern`. Returns the number
    /// of lines removed.
    pub fn delete_every_line(&mut self, pattern: &Pattern) -> usize {
        let mut lines = self.owned_lines();
        let before = lines.len();
        lines.retain(|line| !pattern.anywhere().is_match(line));
        let removed = before - lines.len();
        debug!(%pattern, removed, "delete every line");
        if removed > 0 {
            self.store(lines);
        }
        removed
    }

    /// Delete the first contiguous run of lines matching `block`, one pattern
    /// per line. An empty block is a no-op.
    pub fn delete_block(&mut self, block: &[Pattern]) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }

        let mut lines = self.owned_lines();
        let start = lines
            .windows(block.len())
            .position(|window| block_matches(window, block))
            .ok_or_else(|| Error::NoBlockMatch {
                patterns: describe(block),
            })?;

        lines.drain(start..start + block.len());
        self.store(lines);
        Ok(())
    }

    /// Delete every non-overlapping run of lines matching `block`, scanning
    /// left to right. Returns the number of blocks removed.
    ///
    /// When a partial match breaks on a line that matches the first pattern,
    /// that line starts a new candidate run.
    pub fn delete_every_block(&mut self, block: &[Pattern]) -> usize {
        if block.is_empty() {
            return 0;
        }

        let mut lines = self.owned_lines();
        let mut starts = Vec::new();
        let mut start = 0;
        let mut matched = 0;

        for (index, line) in lines.iter().enumerate() {
            if block[matched].anywhere().is_match(line) {
                if matched == 0 {
                    start = index;
                }
                matched += 1;
            } else if matched > 0 && block[0].anywhere().is_match(line) {
                start = index;
                matched = 1;
            } else {
                matched = 0;
            }

            if matched == block.len() {
                starts.push(start);
                matched = 0;
            }
        }

        debug!(patterns = %describe(block), removed = starts.len(), "delete every block");
        for (deleted, start) in starts.iter().enumerate() {
            let at = start - deleted * block.len();
            lines.drain(at..at + block.len());
        }

        if !starts.is_empty() {
            self.store(lines);
        }
        starts.len()
    }

    /// Append raw text with no line break handling.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append `line` on a line of its own, terminated by `\n`.
    pub fn append_line(&mut self, line: &str) {
        self.ensure_trailing_newline();
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Append each of `lines`, every one terminated by `\n`. Empty input is a
    /// no-op.
    pub fn append_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        if lines.is_empty() {
            return;
        }
        self.ensure_trailing_newline();
        for line in lines {
            self.text.push_str(line.as_ref());
            self.text.push('\n');
        }
    }

    fn ensure_trailing_newline(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn owned_lines(&self) -> Vec<String> {
        self.text.split('\n').map(str::to_string).collect()
    }

    fn store(&mut self, lines: Vec<String>) {
        self.text = lines.join("\n");
    }
}

impl From<&str> for LineDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LineDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Map an `At` locator onto an insertion index for `len` lines.
fn resolve_index(at: isize, len: usize) -> usize {
    if at >= 0 {
        at.unsigned_abs().min(len)
    } else {
        len.saturating_sub(at.unsigned_abs() - 1)
    }
}

fn first_match(lines: &[String], pattern: &Pattern) -> Option<usize> {
    let matcher = pattern.anywhere();
    lines.iter().position(|line| matcher.is_match(line))
}

fn matching_indices(lines: &[String], pattern: &Pattern) -> Vec<usize> {
    let matcher = pattern.anywhere();
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| matcher.is_match(line).then_some(index))
        .collect()
}

fn block_matches(window: &[String], block: &[Pattern]) -> bool {
    window
        .iter()
        .zip(block)
        .all(|(line, pattern)| pattern.anywhere().is_match(line))
}

fn describe(block: &[Pattern]) -> String {
    block
        .iter()
        .map(|pattern| format!("{:?}", pattern.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}
