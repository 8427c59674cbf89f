//! Line-oriented text editing for scribe
//!
//! A [`LineDocument`] models text as an ordered sequence of `\n`-separated
//! lines and supports positional and pattern-based insertion and deletion
//! of single lines and multi-line blocks. Search inputs are [`Pattern`]s:
//! either literal text or a compiled regular expression.

pub mod document;
pub mod error;
pub mod locator;
pub mod pattern;

pub use document::LineDocument;
pub use error::{Error, Result};
pub use locator::{Locator, LocatorOptions};
pub use pattern::{MatchMode, Matcher, Pattern};
