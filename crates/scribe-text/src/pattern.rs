//! Search patterns and their match modes.
//!
//! A [`Pattern`] is either literal text or a compiled [`Regex`]. It is never
//! matched directly; a [`Matcher`] views it through one [`MatchMode`]:
//!
//! - [`MatchMode::Anywhere`]: the pattern may occur at any position.
//! - [`MatchMode::Anchored`]: a literal must equal the whole subject.
//! - [`MatchMode::Global`]: every occurrence is affected by a replace.
//!
//! Caller-supplied regexes are used exactly as given in every mode; only
//! literal text is anchored automatically.

use std::borrow::Cow;
use std::fmt;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Literal text or a compiled regular expression.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "PatternSpec")]
pub enum Pattern {
    /// Matched as a raw substring; no character has special meaning.
    Literal(String),
    /// Matched as-is.
    Regex(Regex),
}

/// How a [`Pattern`] is applied to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Anywhere,
    Anchored,
    Global,
}

/// A pattern viewed through a single [`MatchMode`].
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    pattern: &'a Pattern,
    mode: MatchMode,
}

/// Serialized form: a bare string is a literal, `{ regex = "..." }` compiles.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatternSpec {
    Literal(String),
    Regex { regex: String },
}

impl TryFrom<PatternSpec> for Pattern {
    type Error = Error;

    fn try_from(spec: PatternSpec) -> Result<Self> {
        match spec {
            PatternSpec::Literal(text) => Ok(Self::Literal(text)),
            PatternSpec::Regex { regex } => Self::regex(&regex),
        }
    }
}

impl Pattern {
    /// Create a literal pattern.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile `source` as a regular expression.
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self::Regex)
            .map_err(|source_err| Error::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    pub fn matcher(&self, mode: MatchMode) -> Matcher<'_> {
        Matcher {
            pattern: self,
            mode,
        }
    }

    /// Substring matcher, used for line search and deletion.
    pub fn anywhere(&self) -> Matcher<'_> {
        self.matcher(MatchMode::Anywhere)
    }

    /// Whole-subject matcher, used for exact command lookups.
    pub fn anchored(&self) -> Matcher<'_> {
        self.matcher(MatchMode::Anchored)
    }

    /// Every-occurrence matcher, used for content-wide replace.
    pub fn global(&self) -> Matcher<'_> {
        self.matcher(MatchMode::Global)
    }
}

impl Matcher<'_> {
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_match(&self, subject: &str) -> bool {
        match (self.pattern, self.mode) {
            (Pattern::Literal(text), MatchMode::Anchored) => subject == text,
            (Pattern::Literal(text), _) => subject.contains(text.as_str()),
            (Pattern::Regex(re), _) => re.is_match(subject),
        }
    }

    /// Replace the first match, or every match in [`MatchMode::Global`].
    ///
    /// Literal replacements are inserted verbatim. Regex replacements expand
    /// `$1` and `${name}` group references.
    pub fn replace<'s>(&self, subject: &'s str, replacement: &str) -> Cow<'s, str> {
        match (self.pattern, self.mode) {
            (Pattern::Literal(text), MatchMode::Anchored) => {
                if subject == text {
                    Cow::Owned(replacement.to_string())
                } else {
                    Cow::Borrowed(subject)
                }
            }
            (Pattern::Literal(text), mode) => {
                if !subject.contains(text.as_str()) {
                    return Cow::Borrowed(subject);
                }
                if mode == MatchMode::Global {
                    Cow::Owned(subject.replace(text.as_str(), replacement))
                } else {
                    Cow::Owned(subject.replacen(text.as_str(), replacement, 1))
                }
            }
            (Pattern::Regex(re), MatchMode::Global) => re.replace_all(subject, replacement),
            (Pattern::Regex(re), _) => re.replace(subject, replacement),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<&String> for Pattern {
    fn from(text: &String) -> Self {
        Self::Literal(text.clone())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_metacharacters_are_not_special() {
        let pattern = Pattern::from("a.b*(c)");
        assert!(pattern.anywhere().is_match("xx a.b*(c) yy"));
        assert!(!pattern.anywhere().is_match("aXbbb(c)"));
    }

    #[test]
    fn test_literal_anchored_requires_whole_subject() {
        let pattern = Pattern::from("git status");
        assert!(pattern.anchored().is_match("git status"));
        assert!(!pattern.anchored().is_match("git status --short"));
        assert!(!pattern.anchored().is_match(" git status"));
    }

    #[test]
    fn test_regex_is_never_anchored_automatically() {
        let pattern = Pattern::regex("echo").unwrap();
        assert!(pattern.anchored().is_match("echo hello"));
        assert!(pattern.anywhere().is_match("sudo echo"));
    }

    #[test]
    fn test_global_replace_literal() {
        let pattern = Pattern::from("$x");
        assert_eq!(pattern.global().replace("$x + $x", "$1"), "$1 + $1");
        assert_eq!(pattern.anywhere().replace("$x + $x", "y"), "y + $x");
    }

    #[test]
    fn test_global_replace_regex_expands_groups() {
        let pattern = Pattern::regex(r"(\w+)@(\w+)").unwrap();
        assert_eq!(
            pattern.global().replace("a@b c@d", "$2@$1"),
            "b@a d@c"
        );
        assert_eq!(pattern.anywhere().replace("a@b c@d", "$2@$1"), "b@a c@d");
    }

    #[test]
    fn test_replace_without_match_borrows() {
        let pattern = Pattern::from("zzz");
        assert!(matches!(
            pattern.global().replace("abc", "y"),
            Cow::Borrowed("abc")
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::from("plain").to_string(), "plain");
        assert_eq!(Pattern::regex("^a+$").unwrap().to_string(), "/^a+$/");
    }

    #[test]
    fn test_invalid_regex() {
        let err = Pattern::regex("(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
