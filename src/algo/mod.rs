//! Matching strategies over character sequences.
//!
//! Every strategy shares the same signature:
//!
//! ```text
//! fn(case_sensitive: bool, forward: bool, input: &[char], pattern: &[char]) -> MatchResult
//! ```
//!
//! The strategies do not lowercase the pattern: when `case_sensitive` is
//! false the pattern must already be lowercased (see [`crate::pattern::Pattern`]).
//! Only the input side is folded, one character at a time and only as far as
//! the scan goes. When `forward` is false the input is scanned right to left,
//! but the reported span is always in left-to-right coordinates.
//!
//! # Example:
//! ```
//! use runematch::algo::{fuzzy_match, MatchResult};
//!
//! let input: Vec<char> = "foo bar baz".chars().collect();
//! let pattern: Vec<char> = "fbb".chars().collect();
//!
//! let result = fuzzy_match(false, true, &input, &pattern);
//! assert_eq!(result, MatchResult::new(0, 9, 3));
//! ```

use std::fmt::{self, Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod anchored;
mod exact;
mod fuzzy;
pub mod util;

pub use anchored::{equal_match, prefix_match, suffix_match};
pub use exact::exact_match_naive;
pub use fuzzy::{BoundaryReset, fuzzy_match, fuzzy_match_with};

/// Outcome of a single match call.
///
/// `start` is inclusive and `end` exclusive, both in input-forward
/// coordinates. `start == end == -1` means the pattern was not found, in which
/// case `penalty` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// First matched index, or -1
    pub start: isize,
    /// One past the last matched index, or -1
    pub end: isize,
    /// Distance-from-boundary penalty, lower is better
    ///
    /// Only the fuzzy strategy computes one: every run of consecutive matched
    /// characters costs the distance of its first character from the start of
    /// its word, camelCase humps counting as word starts.
    ///
    /// ```text
    /// input     src/fuzzyMatch.rs
    /// distance  123-1234512345-12
    /// pattern       f    M
    /// penalty       1  + 1          = 2
    /// ```
    pub penalty: i32,
}

impl MatchResult {
    /// The "no match" result
    pub const NONE: MatchResult = MatchResult {
        start: -1,
        end: -1,
        penalty: 0,
    };

    /// Create a result spanning `[start, end)`.
    pub const fn new(start: isize, end: isize, penalty: i32) -> Self {
        Self { start, end, penalty }
    }

    /// Zero-width match at `index`, as produced by an empty pattern.
    pub(crate) fn empty_at(index: usize) -> Self {
        Self::span(index, index, 0)
    }

    pub(crate) fn span(start: usize, end: usize, penalty: i32) -> Self {
        Self::new(start as isize, end as isize, penalty)
    }

    /// Returns true unless this is [`MatchResult::NONE`].
    pub fn is_match(&self) -> bool {
        self.start >= 0 && self.end >= 0
    }

    /// The matched span, or `None` if nothing matched.
    pub fn range(&self) -> Option<Range<usize>> {
        if self.is_match() {
            Some(self.start as usize..self.end as usize)
        } else {
            None
        }
    }

    /// Width of the matched span, 0 when nothing matched.
    pub fn len(&self) -> usize {
        self.range().map_or(0, |r| r.len())
    }

    /// Returns true when the span is zero-width or absent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.penalty)
    }
}

//------------------------------------------------------------------------------
/// The matching discipline to apply to a query
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Characters of the pattern appear in order, scored by word boundaries
    #[default]
    Fuzzy,
    /// The pattern appears as a contiguous substring
    Exact,
    /// The input starts with the pattern
    Prefix,
    /// The input, minus trailing whitespace, ends with the pattern
    Suffix,
    /// The input is the pattern
    Equal,
}

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fuzzy,
        Algorithm::Exact,
        Algorithm::Prefix,
        Algorithm::Suffix,
        Algorithm::Equal,
    ];

    /// Run this algorithm with the default fuzzy scoring policy.
    pub fn run(self, case_sensitive: bool, forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
        self.run_with(BoundaryReset::default(), case_sensitive, forward, input, pattern)
    }

    /// Run this algorithm; `reset` only affects [`Algorithm::Fuzzy`].
    pub fn run_with(
        self,
        reset: BoundaryReset,
        case_sensitive: bool,
        forward: bool,
        input: &[char],
        pattern: &[char],
    ) -> MatchResult {
        match self {
            Algorithm::Fuzzy => fuzzy_match_with(reset, case_sensitive, forward, input, pattern),
            Algorithm::Exact => exact_match_naive(case_sensitive, forward, input, pattern),
            Algorithm::Prefix => prefix_match(case_sensitive, forward, input, pattern),
            Algorithm::Suffix => suffix_match(case_sensitive, forward, input, pattern),
            Algorithm::Equal => equal_match(case_sensitive, forward, input, pattern),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Algorithm::Fuzzy => "fuzzy",
            Algorithm::Exact => "exact",
            Algorithm::Prefix => "prefix",
            Algorithm::Suffix => "suffix",
            Algorithm::Equal => "equal",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown matching algorithm {0:?}, expected one of: fuzzy, exact, prefix, suffix, equal")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}
