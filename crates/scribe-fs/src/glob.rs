//! Glob patterns over `/`-separated relative paths.
//!
//! Supported syntax:
//!
//! - `*` any run of characters except `/`
//! - `**` any run of characters including `/`; `**/` also matches nothing
//! - `?` a single character except `/`
//! - `[abc]`, `[a-z]`, `[!abc]` character classes
//! - `{a,b}` alternatives
//! - `\x` the literal character `x`

use std::path::Path;

use regex::Regex;
use scribe_text::Pattern;

use crate::error::{Error, Result};

/// A compiled glob.
#[derive(Debug, Clone)]
pub struct Glob {
    source: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidGlob {
            pattern: pattern.to_string(),
            message: message.to_string(),
        };

        let translated = translate(pattern).map_err(invalid)?;
        let regex = Regex::new(&translated).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a relative path. Backslashes are treated as separators.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.regex.is_match(&to_slash(path.as_ref()))
    }
}

/// Render `path` with `/` separators.
pub(crate) fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn translate(pattern: &str) -> std::result::Result<String, &'static str> {
    let mut out = String::from("^");
    let mut chars = pattern.chars().peekable();
    let mut braces = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("(?:.*/)?");
                } else {
                    out.push_str(".*");
                }
            }
            '*' => out.push_str("[^/]*"),
            '?' => out.push_str("[^/]"),
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        ']' => {
                            closed = true;
                            break;
                        }
                        '\\' | '[' | '&' | '~' => {
                            out.push('\\');
                            out.push(c);
                        }
                        _ => out.push(c),
                    }
                }
                if !closed {
                    return Err("unclosed character class");
                }
                out.push(']');
            }
            '{' => {
                braces += 1;
                out.push_str("(?:");
            }
            '}' if braces > 0 => {
                braces -= 1;
                out.push(')');
            }
            ',' if braces > 0 => out.push('|'),
            '\\' => match chars.next() {
                Some(escaped) => out.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4]))),
                None => return Err("trailing backslash"),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    if braces > 0 {
        return Err("unclosed brace");
    }
    out.push('$');
    Ok(out)
}

/// Files selected for a multi-file edit.
///
/// An empty include list selects every file.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Only files whose text contains this pattern are selected
    pub containing: Option<Pattern>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, glob: impl Into<String>) -> Self {
        self.include.push(glob.into());
        self
    }

    pub fn exclude(mut self, glob: impl Into<String>) -> Self {
        self.exclude.push(glob.into());
        self
    }

    pub fn containing(mut self, pattern: impl Into<Pattern>) -> Self {
        self.containing = Some(pattern.into());
        self
    }

    pub(crate) fn compile(&self) -> Result<CompiledFileSet> {
        let include = if self.include.is_empty() {
            vec![Glob::new("**")?]
        } else {
            compile_all(&self.include)?
        };
        Ok(CompiledFileSet {
            include,
            exclude: compile_all(&self.exclude)?,
        })
    }
}

fn compile_all(globs: &[String]) -> Result<Vec<Glob>> {
    globs.iter().map(|g| Glob::new(g)).collect()
}

pub(crate) struct CompiledFileSet {
    include: Vec<Glob>,
    exclude: Vec<Glob>,
}

impl CompiledFileSet {
    pub(crate) fn selects(&self, relative: &Path) -> bool {
        self.include.iter().any(|g| g.is_match(relative))
            && !self.exclude.iter().any(|g| g.is_match(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*.rs", "main.rs", true)]
    #[case("*.rs", "src/main.rs", false)]
    #[case("**/*.rs", "main.rs", true)]
    #[case("**/*.rs", "src/bin/main.rs", true)]
    #[case("src/**", "src/a/b.txt", true)]
    #[case("src/**", "srcx/a.txt", false)]
    #[case("file?.txt", "file1.txt", true)]
    #[case("file?.txt", "file10.txt", false)]
    #[case("[ab].md", "a.md", true)]
    #[case("[!ab].md", "a.md", false)]
    #[case("[!ab].md", "c.md", true)]
    #[case("*.{json,yaml}", "x.yaml", true)]
    #[case("*.{json,yaml}", "x.toml", false)]
    #[case("a+b(c).txt", "a+b(c).txt", true)]
    #[case("\\*.txt", "*.txt", true)]
    #[case("\\*.txt", "a.txt", false)]
    #[case("**", "deep/nested/file", true)]
    fn test_glob_matching(#[case] glob: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(Glob::new(glob).unwrap().is_match(path), expected, "{glob} vs {path}");
    }

    #[test]
    fn test_backslash_paths_match() {
        assert!(Glob::new("src/*.rs").unwrap().is_match(Path::new("src\\lib.rs")));
    }

    #[rstest]
    #[case("[abc")]
    #[case("{a,b")]
    #[case("abc\\")]
    fn test_invalid_globs(#[case] glob: &str) {
        assert!(matches!(Glob::new(glob), Err(Error::InvalidGlob { .. })));
    }

    #[test]
    fn test_file_set_defaults_to_everything() {
        let compiled = FileSet::new().exclude("*.lock").compile().unwrap();
        assert!(compiled.selects(Path::new("a/b/c.txt")));
        assert!(!compiled.selects(Path::new("Cargo.lock")));
    }
}
