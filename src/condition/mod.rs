//! Condition parsing and classification module
//!
//! This module handles parsing width media query strings like
//! "(min-width: 400px) and (max-width: 920px)", classifying them as a min,
//! max or range bound and ranking two conditions against each other.

mod pair;
pub mod parser;
mod priority;
mod query;


pub use pair::*;
pub use parser::*;
pub use query::*;
