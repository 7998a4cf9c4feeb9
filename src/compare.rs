//! Comparator and priority sorting
//!
//! [`compare`] turns [`Condition::has_priority`] into an [`Ordering`] that can
//! be handed to any sort routine. It only ever answers `Less` or `Greater`:
//! two conditions that do not outrank each other still compare as `Greater`.
//! Callers rely on that shape, so it is kept as is.
//!
//! Because such a comparator is not a total order, the std slice sorts are
//! free to panic on it. [`sort_by_priority`] and [`sort_raw`] use a stable
//! insertion sort that only asks whether one condition precedes another.

use crate::condition::Condition;
use ahash::AHashMap;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Either a raw condition string or an already built [`Condition`]
#[derive(Debug, Clone, Copy)]
pub enum ConditionInput<'a> {
    Raw(&'a str),
    Parsed(&'a Condition),
}

impl<'a> ConditionInput<'a> {
    /// Parse raw input, borrow parsed input
    pub fn into_condition(self) -> Cow<'a, Condition> {
        match self {
            ConditionInput::Raw(raw) => Cow::Owned(Condition::new(raw)),
            ConditionInput::Parsed(condition) => Cow::Borrowed(condition),
        }
    }
}

impl<'a> From<&'a str> for ConditionInput<'a> {
    fn from(raw: &'a str) -> Self {
        ConditionInput::Raw(raw)
    }
}

impl<'a> From<&'a String> for ConditionInput<'a> {
    fn from(raw: &'a String) -> Self {
        ConditionInput::Raw(raw.as_str())
    }
}

impl<'a> From<&'a Condition> for ConditionInput<'a> {
    fn from(condition: &'a Condition) -> Self {
        ConditionInput::Parsed(condition)
    }
}

/// Compare two conditions by priority
///
/// Returns `Less` when `a` has priority over `b` and `Greater` otherwise,
/// never `Equal`. `compare(a, b) as i8` gives the -1 / 1 form.
pub fn compare<'a, 'b>(
    a: impl Into<ConditionInput<'a>>,
    b: impl Into<ConditionInput<'b>>,
) -> Ordering {
    let a = a.into().into_condition();
    let b = b.into().into_condition();

    if a.has_priority(&b) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Sort conditions so that higher priority ones come first
pub fn sort_by_priority(conditions: &mut [Condition]) {
    log::debug!("sorting {} condition(s) by priority", conditions.len());
    insertion_sort(conditions, |a, b| a.has_priority(b));
}

/// Sort raw condition strings so that higher priority ones come first
///
/// Repeated strings are parsed once per call; nothing is kept afterwards.
pub fn sort_raw<S: AsRef<str>>(items: &mut Vec<S>) {
    log::debug!("sorting {} raw condition(s) by priority", items.len());

    let conditions: Vec<Condition> = {
        let mut parsed: AHashMap<&str, Condition> = AHashMap::with_capacity(items.len());
        items
            .iter()
            .map(|item| {
                let raw = item.as_ref();
                parsed
                    .entry(raw)
                    .or_insert_with(|| Condition::new(raw))
                    .clone()
            })
            .collect()
    };

    let mut keyed: Vec<(Condition, S)> = conditions.into_iter().zip(items.drain(..)).collect();

    insertion_sort(&mut keyed, |a, b| a.0.has_priority(&b.0));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}

/// Stable insertion sort: an item moves left past every neighbour it precedes
fn insertion_sort<T>(items: &mut [T], mut precedes: impl FnMut(&T, &T) -> bool) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && precedes(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
