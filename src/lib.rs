//! Media Query Condition - Parse, classify and prioritize width media queries
//!
//! This crate turns CSS width conditions such as
//! `(min-width: 400px) and (max-width: 920px)` into a [`Condition`], tells
//! whether it is a min, max or range bound, and orders conditions so the more
//! specific rule can be emitted last. Python bindings via PyO3 are available
//! behind the `python` feature.
//!
//! ```
//! use media_query_condition::{compare, Condition};
//! use std::cmp::Ordering;
//!
//! let range = Condition::new("(min-width: 100px) and (max-width: 500px)");
//! assert!(range.is_range());
//! assert!(range.has_priority(&Condition::new("(min-width: 500px)")));
//!
//! assert_eq!(compare("(max-width: 300px)", "(min-width: 500px)"), Ordering::Less);
//! ```

pub mod compare;
pub mod condition;

#[cfg(feature = "python")]
mod python;

pub use crate::compare::{compare, sort_by_priority, sort_raw, ConditionInput};
pub use crate::condition::{
    Bound, Condition, ConditionPair, Selected, Selection, MAX_WIDTH, MIN_WIDTH,
};
