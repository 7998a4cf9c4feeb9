//! Parsed and classified media query condition

use crate::condition::pair::{ConditionPair, Selected, Selection};
use crate::condition::parser::{parse_pairs, Pairs};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Key that marks a lower width bound
pub const MIN_WIDTH: &str = "min-width";
/// Key that marks an upper width bound
pub const MAX_WIDTH: &str = "max-width";

/// Width classification derived from the parsed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Only `min-width` present
    Min,
    /// Only `max-width` present
    Max,
    /// Both `min-width` and `max-width` present
    Range,
    /// Neither width key present, e.g. `(orientation: landscape)`
    Unbounded,
}

impl Bound {
    fn classify(pairs: &[ConditionPair]) -> Self {
        let has_min = pairs.iter().any(|p| p.key == MIN_WIDTH);
        let has_max = pairs.iter().any(|p| p.key == MAX_WIDTH);

        match (has_min, has_max) {
            (true, true) => Bound::Range,
            (true, false) => Bound::Min,
            (false, true) => Bound::Max,
            (false, false) => Bound::Unbounded,
        }
    }
}

/// A single media query condition such as `(min-width: 400px) and (max-width: 920px)`
///
/// Construction never fails: input without any recognizable fragment simply
/// ends up [`Bound::Unbounded`]. The raw string is kept byte for byte and the
/// classification is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Condition {
    raw: String,
    pairs: Pairs,
    bound: Bound,
}

impl Condition {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let pairs = parse_pairs(&raw);
        let bound = Bound::classify(&pairs);

        Self { raw, pairs, bound }
    }

    #[inline]
    pub fn is_min(&self) -> bool {
        self.bound == Bound::Min
    }

    #[inline]
    pub fn is_max(&self) -> bool {
        self.bound == Bound::Max
    }

    #[inline]
    pub fn is_range(&self) -> bool {
        self.bound == Bound::Range
    }

    /// Same as [`Condition::is_range`]
    #[inline]
    pub fn is_min_max(&self) -> bool {
        self.is_range()
    }

    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// The exact string this condition was built from
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn pairs(&self) -> &[ConditionPair] {
        &self.pairs
    }

    pub fn keys(&self, selection: Selection) -> Selected<'_> {
        Selected::pick(selection, self.pairs.iter().map(|p| p.key.as_str()))
    }

    pub fn values(&self, selection: Selection) -> Selected<'_> {
        Selected::pick(selection, self.pairs.iter().map(|p| p.value.as_str()))
    }

    pub fn all_keys(&self) -> Vec<&str> {
        self.keys(Selection::All).into_vec()
    }

    pub fn all_values(&self) -> Vec<&str> {
        self.values(Selection::All).into_vec()
    }

    pub fn first_key(&self) -> Option<&str> {
        self.pairs.first().map(|p| p.key.as_str())
    }

    pub fn first_value(&self) -> Option<&str> {
        self.pairs.first().map(|p| p.value.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Condition::new(s))
    }
}

impl From<&str> for Condition {
    fn from(raw: &str) -> Self {
        Condition::new(raw)
    }
}

impl From<String> for Condition {
    fn from(raw: String) -> Self {
        Condition::new(raw)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.raw
    }
}
