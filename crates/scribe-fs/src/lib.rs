//! Filesystem collaborators for scribe
//!
//! Loads files into [`LineDocument`](scribe_text::LineDocument)s with
//! normalized line endings and writes them back only when they changed.
//! Also provides JSON and YAML round trips, glob-based multi-file edits,
//! and format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod glob;
pub mod io;
pub mod json;
pub mod line_endings;
pub mod text;
pub mod walk;
pub mod yaml;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use glob::{FileSet, Glob};
pub use io::file_exists;
pub use json::edit_json;
pub use text::{edit_file, read_document};
pub use walk::{Preview, edit_files, find_files, preview_files};
pub use yaml::edit_yaml;
