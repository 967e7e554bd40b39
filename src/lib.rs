//! runematch is the matching core of a fuzzy finder.
//!
//! Given a candidate line and a query, it tells whether the query matches
//! under one of five disciplines ([`Algorithm`]), where the match is, and how
//! good a fuzzy match is. Lower penalties rank first: a match at the start of
//! words beats one scattered through the middle of them.
//!
//! The strategies in [`algo`] are plain functions over `&[char]`, free of
//! allocation and shared state, so they can be called from any number of
//! threads at once. [`Matcher`] wraps them with query preparation (smart case,
//! diacritic normalization) and [`MatchOptions`].
//!
//! # Examples
//!
//! ```
//! use runematch::prelude::*;
//!
//! let matcher = Matcher::new("fbb", MatchOptions::default());
//! let lines = ["foo bar baz", "foo barbaz", "fizz"];
//!
//! let results: Vec<MatchResult> = lines.iter().map(|line| matcher.match_str(line)).collect();
//! assert_eq!(results[0], MatchResult::new(0, 9, 3));
//! assert_eq!(results[1], MatchResult::new(0, 8, 6));
//! assert!(!results[2].is_match());
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod algo;
mod matcher;
pub mod normalize;
pub mod options;
pub mod pattern;
pub mod prelude;

pub use crate::algo::{Algorithm, BoundaryReset, MatchResult};
pub use crate::matcher::Matcher;
pub use crate::options::{MatchOptions, MatchOptionsBuilder};
pub use crate::pattern::{CaseMatching, Pattern};
