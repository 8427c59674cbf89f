//! Command implementations for scribe-cli

pub mod apply;
pub mod edit;

pub use apply::run_apply;
pub use edit::{run_contains, run_edit};
