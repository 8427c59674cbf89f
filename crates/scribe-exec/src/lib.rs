//! Command execution for scribe
//!
//! Commands run through a [`Runner`], an explicit context object that
//! delegates to a live [`Executor`] or, once mocking is enabled, to a
//! [`MockState`] replaying pre-programmed [`CommandOutput`]s.
//!
//! A non-zero exit status is reported as [`Error::ProcessFailed`] in both
//! modes, so code written against [`Runner::run`] sees identical failures
//! whether it is mocked or not.

pub mod error;
pub mod executor;
pub mod mock;
pub mod output;
pub mod runner;

pub use error::{Error, Result};
pub use executor::{Executor, ShellExecutor};
pub use mock::MockState;
pub use output::{CommandOutput, RunOptions};
pub use runner::Runner;
