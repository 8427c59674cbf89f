//! Error types for scribe-exec

/// Result type for scribe-exec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process exited with a non-zero status
    #[error("Command `{command}` failed with exit code {exit_code}: {stderr}")]
    ProcessFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// The process could not be started
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Every mock queue that could answer the command is empty
    #[error("No mock found for command: `{command}`")]
    NoMockFound { command: String },

    #[error("Mocking is already enabled")]
    MockAlreadyEnabled,

    #[error("Mocking is not enabled")]
    MockNotEnabled,

    /// Mock results were programmed but never consumed
    #[error("{remaining} mock result(s) were not consumed")]
    MocksNotConsumed { remaining: usize },
}
