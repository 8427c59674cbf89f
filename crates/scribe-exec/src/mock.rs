//! Scriptable replacement for live command execution.
//!
//! A [`MockState`] holds one default queue and an ordered list of command
//! matchers, each with its own queue. Every call pops exactly one result:
//! from the first registered matcher whose pattern matches the whole command
//! and whose queue is non-empty, otherwise from the default queue.
//!
//! ```
//! use scribe_exec::{CommandOutput, MockState};
//!
//! let mut mock = MockState::new();
//! mock.returns(CommandOutput::stdout("default"))
//!     .command("git status")
//!     .returns(CommandOutput::stdout("clean"));
//! ```

use std::collections::VecDeque;

use scribe_text::Pattern;
use tracing::trace;

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::output::{CommandOutput, RunOptions};

#[derive(Debug)]
struct CommandMatcher {
    pattern: Pattern,
    queue: VecDeque<CommandOutput>,
}

/// Queue that [`MockState::returns`] appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selected {
    Default,
    Matcher(usize),
}

/// Pre-programmed command results, consumed front to back.
#[derive(Debug)]
pub struct MockState {
    default: VecDeque<CommandOutput>,
    matchers: Vec<CommandMatcher>,
    selected: Selected,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            default: VecDeque::new(),
            matchers: Vec::new(),
            selected: Selected::Default,
        }
    }
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `result` on the selected queue: the default queue, or the queue
    /// of the most recent [`command`](Self::command).
    pub fn returns(&mut self, result: CommandOutput) -> &mut Self {
        match self.selected {
            Selected::Default => self.default.push_back(result),
            Selected::Matcher(index) => self.matchers[index].queue.push_back(result),
        }
        self
    }

    /// Queue a successful result with empty output.
    pub fn returns_ok(&mut self) -> &mut Self {
        self.returns(CommandOutput::default())
    }

    pub fn returns_many(&mut self, results: impl IntoIterator<Item = CommandOutput>) -> &mut Self {
        for result in results {
            self.returns(result);
        }
        self
    }

    /// Register a new matcher for commands equal to `pattern` and select its
    /// queue. A literal must match the whole command; a regex is used as
    /// given. Repeating a pattern registers a second, independent queue.
    pub fn command(&mut self, pattern: impl Into<Pattern>) -> &mut Self {
        self.matchers.push(CommandMatcher {
            pattern: pattern.into(),
            queue: VecDeque::new(),
        });
        self.selected = Selected::Matcher(self.matchers.len() - 1);
        self
    }

    /// Select the default queue for subsequent [`returns`](Self::returns).
    pub fn default_queue(&mut self) -> &mut Self {
        self.selected = Selected::Default;
        self
    }

    /// Number of queued results not yet consumed.
    pub fn remaining(&self) -> usize {
        self.default.len() + self.matchers.iter().map(|m| m.queue.len()).sum::<usize>()
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail if any queue still holds results.
    pub fn assert_done(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(Error::MocksNotConsumed { remaining }),
        }
    }

    /// Drop every queue and matcher.
    pub fn reset(&mut self) {
        self.default.clear();
        self.matchers.clear();
        self.selected = Selected::Default;
    }

    /// Pop the result that answers `command`.
    pub fn next_result(&mut self, command: &str) -> Result<CommandOutput> {
        let matched = self
            .matchers
            .iter_mut()
            .enumerate()
            .find(|(_, m)| !m.queue.is_empty() && m.pattern.anchored().is_match(command));

        let result = match matched {
            Some((index, matcher)) => {
                trace!(command, matcher = index, pattern = %matcher.pattern, "mock matcher selected");
                matcher.queue.pop_front()
            }
            None => {
                trace!(command, "mock default queue selected");
                self.default.pop_front()
            }
        };

        result.ok_or_else(|| Error::NoMockFound {
            command: command.to_string(),
        })
    }
}

impl Executor for MockState {
    fn execute(&mut self, command: &str, _options: &RunOptions) -> Result<CommandOutput> {
        self.next_result(command)
    }
}
