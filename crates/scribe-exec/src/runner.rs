//! The command-running context object.

use tracing::debug;

use crate::error::{Error, Result};
use crate::executor::{Executor, ShellExecutor};
use crate::mock::MockState;
use crate::output::{CommandOutput, RunOptions};

/// Runs commands against a live executor or, while mocking is enabled,
/// against a [`MockState`].
///
/// Each runner owns its mock state, so independent runners never observe
/// each other's queues.
pub struct Runner {
    live: Box<dyn Executor>,
    mock: Option<MockState>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("mock", &self.mock)
            .finish_non_exhaustive()
    }
}

impl Runner {
    /// A runner backed by the platform shell.
    pub fn new() -> Self {
        Self::with_executor(Box::new(ShellExecutor::new()))
    }

    pub fn with_executor(live: Box<dyn Executor>) -> Self {
        Self { live, mock: None }
    }

    /// Switch to mocked execution with empty queues.
    ///
    /// Fails if mocking is already enabled.
    pub fn enable_mock(&mut self) -> Result<&mut MockState> {
        if self.mock.is_some() {
            return Err(Error::MockAlreadyEnabled);
        }
        debug!("mocking enabled");
        Ok(self.mock.insert(MockState::new()))
    }

    /// Return to live execution, handing back the mock state if there was one.
    pub fn disable_mock(&mut self) -> Option<MockState> {
        debug!("mocking disabled");
        self.mock.take()
    }

    pub fn is_mocked(&self) -> bool {
        self.mock.is_some()
    }

    /// The active mock state, for programming further results.
    pub fn mock(&mut self) -> Result<&mut MockState> {
        self.mock.as_mut().ok_or(Error::MockNotEnabled)
    }

    /// Fail unless mocking is enabled and every queued result was consumed.
    pub fn assert_mocks_done(&self) -> Result<()> {
        self.mock
            .as_ref()
            .ok_or(Error::MockNotEnabled)?
            .assert_done()
    }

    /// Run `command`, failing with [`Error::ProcessFailed`] on a non-zero exit.
    pub fn run(&mut self, command: &str, options: &RunOptions) -> Result<CommandOutput> {
        let output = match self.mock.as_mut() {
            Some(mock) => mock.execute(command, options)?,
            None => self.live.execute(command, options)?,
        };

        debug!(
            command,
            mocked = self.mock.is_some(),
            exit_code = output.exit_code,
            "command finished"
        );

        if !output.success() {
            return Err(Error::ProcessFailed {
                command: command.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }
        Ok(output)
    }

    /// Run `command` and return its stdout, trimmed unless `options.trim` is off.
    pub fn stdout(&mut self, command: &str, options: &RunOptions) -> Result<String> {
        let output = self.run(command, options)?;
        if options.trim {
            Ok(output.stdout.trim().to_string())
        } else {
            Ok(output.stdout)
        }
    }
}
