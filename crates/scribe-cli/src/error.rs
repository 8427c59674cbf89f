//! Error types for scribe-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from scribe-text
    #[error(transparent)]
    Text(#[from] scribe_text::Error),

    /// Error from scribe-fs
    #[error(transparent)]
    Fs(#[from] scribe_fs::Error),

    /// Error from scribe-exec
    #[error(transparent)]
    Exec(#[from] scribe_exec::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
