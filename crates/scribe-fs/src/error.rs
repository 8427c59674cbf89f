//! Error types for scribe-fs

use std::path::PathBuf;

/// Result type for scribe-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in scribe-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Invalid glob {pattern:?}: {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error(transparent)]
    Edit(#[from] scribe_text::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: &std::path::Path, format: &str, message: impl ToString) -> Self {
        Self::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn serialize(path: &std::path::Path, format: &str, message: impl ToString) -> Self {
        Self::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.into(),
            message: message.to_string(),
        }
    }
}
