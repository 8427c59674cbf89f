//! Live command execution.

use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::output::{CommandOutput, RunOptions};

/// Turns a command string into its captured output.
///
/// Implementations report a non-zero exit through
/// [`CommandOutput::exit_code`], not as an error; the
/// [`Runner`](crate::Runner) decides what a failed exit means.
pub trait Executor: Send {
    fn execute(&mut self, command: &str, options: &RunOptions) -> Result<CommandOutput>;
}

/// Runs commands through the platform shell and captures both streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

/// Build a shell [`Command`] that executes `command`.
///
/// - Unix: `sh -c "{command}"`
/// - Windows: `cmd /C "{command}"`
fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", command]);
        c
    }
    #[cfg(not(windows))]
    {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    }
}

impl Executor for ShellExecutor {
    fn execute(&mut self, command: &str, options: &RunOptions) -> Result<CommandOutput> {
        let mut cmd = shell_command(command);
        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }
        cmd.envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let output = cmd.output().map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        debug!(command, exit_code, "executed shell command");

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
