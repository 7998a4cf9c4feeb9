//! Condition string parser

use crate::condition::pair::ConditionPair;
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Inline capacity for parsed pairs; a range condition has two
pub type Pairs = SmallVec<[ConditionPair; 2]>;

/// `(key: value)` with ASCII word characters, a hyphenated key and at most one
/// whitespace character after the colon
///
/// Whitespace is the ECMAScript set, which includes U+FEFF and excludes U+0085.
static FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\(([A-Za-z0-9_-]+):",
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]?",
        r"([A-Za-z0-9_]+)\)",
    ))
    .expect("fragment pattern is valid")
});

/// Extract every `(key: value)` fragment from a condition string, in order
///
/// Fragments that do not fit the pattern (for example a decimal value like
/// `920.5px`) are skipped. An input without any fragment yields no pairs.
pub fn parse_pairs(condition: &str) -> Pairs {
    let pairs: Pairs = FRAGMENT
        .captures_iter(condition)
        .map(|caps| ConditionPair::new(&caps[1], &caps[2]))
        .collect();

    log::trace!("parsed {} pair(s) from {:?}", pairs.len(), condition);
    pairs
}
