//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! runematch types with a single `use runematch::prelude::*;` statement.

pub use crate::algo::{
    Algorithm, BoundaryReset, MatchResult, ParseAlgorithmError, equal_match, exact_match_naive, fuzzy_match,
    fuzzy_match_with, prefix_match, suffix_match,
};
pub use crate::matcher::Matcher;
pub use crate::options::{ConfigError, MatchOptions, MatchOptionsBuilder};
pub use crate::pattern::{CaseMatching, Pattern};
