//! Error types for scribe-text

/// Result type for scribe-text operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single-line operation found no line matching its pattern
    #[error("No line matches pattern: {pattern}")]
    NoMatch { pattern: String },

    /// No contiguous run of lines matches the block patterns
    #[error("No block matches patterns: {patterns}")]
    NoBlockMatch { patterns: String },

    /// More than one locator key was provided
    #[error("Ambiguous locator: only one of {keys} may be set")]
    AmbiguousLocator { keys: String },

    /// No locator key was provided
    #[error("Missing locator: one of at, above, below, above_every, below_every is required")]
    MissingLocator,

    #[error("Invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    pub fn no_match(pattern: impl std::fmt::Display) -> Self {
        Self::NoMatch {
            pattern: pattern.to_string(),
        }
    }
}
