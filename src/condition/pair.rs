//! Parsed fragments and selection modes for condition accessors

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// A single `(key: value)` fragment, in the order it appeared in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionPair {
    pub key: String,
    pub value: String,
}

impl ConditionPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// How many keys or values an accessor should return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every entry, in pair order
    #[default]
    All,
    /// Only the leading entry
    First,
}

impl From<&str> for Selection {
    /// `"first"` selects the leading entry; any other name selects all
    fn from(name: &str) -> Self {
        match name {
            "first" => Selection::First,
            _ => Selection::All,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from(s))
    }
}

/// Result of a keyed accessor, shaped by the requested [`Selection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected<'a> {
    All(Vec<&'a str>),
    /// `None` when the condition has no pairs
    First(Option<&'a str>),
}

impl<'a> Selected<'a> {
    pub(crate) fn pick(selection: Selection, mut items: impl Iterator<Item = &'a str>) -> Self {
        match selection {
            Selection::All => Selected::All(items.collect()),
            Selection::First => Selected::First(items.next()),
        }
    }

    /// Collapse into a list; `First` yields zero or one entries
    pub fn into_vec(self) -> Vec<&'a str> {
        match self {
            Selected::All(items) => items,
            Selected::First(item) => item.into_iter().collect(),
        }
    }
}
