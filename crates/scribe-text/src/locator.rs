//! Insertion targets for [`LineDocument::insert_line`](crate::LineDocument::insert_line).

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// Where a line is inserted.
#[derive(Debug, Clone)]
pub enum Locator {
    /// Insert before this index. Values past the end append; negative values
    /// count from the end, `-1` appending as the new last line. Negative
    /// values beyond the start clamp to index 0.
    At(isize),
    /// Immediately before the first matching line.
    Above(Pattern),
    /// Immediately after the first matching line.
    Below(Pattern),
    /// Before every matching line. No match is a no-op.
    AboveEvery(Pattern),
    /// After every matching line. No match is a no-op.
    BelowEvery(Pattern),
}

/// Locator given as a set of optional keys, as found in plan files and
/// command-line flags. Exactly one key must be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocatorOptions {
    pub at: Option<isize>,
    pub above: Option<Pattern>,
    pub below: Option<Pattern>,
    pub above_every: Option<Pattern>,
    pub below_every: Option<Pattern>,
}

impl LocatorOptions {
    pub fn is_empty(&self) -> bool {
        self.set_keys().is_empty()
    }

    fn set_keys(&self) -> Vec<&'static str> {
        [
            ("at", self.at.is_some()),
            ("above", self.above.is_some()),
            ("below", self.below.is_some()),
            ("above_every", self.above_every.is_some()),
            ("below_every", self.below_every.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, set)| set.then_some(key))
        .collect()
    }

    /// Resolve to a single [`Locator`].
    pub fn into_locator(self) -> Result<Locator> {
        let keys = self.set_keys();
        if keys.len() > 1 {
            return Err(Error::AmbiguousLocator {
                keys: keys.join(", "),
            });
        }

        let locator = match self {
            Self { at: Some(at), .. } => Locator::At(at),
            Self {
                above: Some(pattern),
                ..
            } => Locator::Above(pattern),
            Self {
                below: Some(pattern),
                ..
            } => Locator::Below(pattern),
            Self {
                above_every: Some(pattern),
                ..
            } => Locator::AboveEvery(pattern),
            Self {
                below_every: Some(pattern),
                ..
            } => Locator::BelowEvery(pattern),
            _ => return Err(Error::MissingLocator),
        };
        Ok(locator)
    }
}

impl TryFrom<LocatorOptions> for Locator {
    type Error = Error;

    fn try_from(options: LocatorOptions) -> Result<Self> {
        options.into_locator()
    }
}
