//! A query bound to its matching options.
//!
//! [`Matcher`] does the per-query work once (case resolution, folding,
//! normalization) so `match_*` only touches one candidate line. It is
//! immutable once built, so a single instance can be shared by any number of
//! threads matching disjoint candidates.
//!
//! # Example:
//! ```
//! use runematch::prelude::*;
//!
//! let options = MatchOptionsBuilder::default()
//!     .algorithm(Algorithm::Fuzzy)
//!     .build()
//!     .unwrap();
//! let matcher = Matcher::new("fbb", options);
//!
//! assert_eq!(matcher.match_str("foo bar baz"), MatchResult::new(0, 9, 3));
//! assert!(!matcher.match_str("foo").is_match());
//! ```

use std::fmt::{Display, Error, Formatter};

use crate::algo::MatchResult;
use crate::normalize::{map_span_to_original, normalize, normalize_runes_with_char_mapping, normalize_with_char_mapping};
use crate::options::MatchOptions;
use crate::pattern::Pattern;

/// Matches one prepared query against candidate lines
#[derive(Debug, Clone)]
pub struct Matcher {
    query: String,
    pattern: Pattern,
    options: MatchOptions,
}

impl Matcher {
    /// Prepare `query` for matching with `options`.
    pub fn new(query: &str, options: MatchOptions) -> Self {
        let pattern = if options.normalize {
            Pattern::new(&normalize(query), options.case)
        } else {
            Pattern::new(query, options.case)
        };
        debug!(
            "Initialized {} matcher for {:?} (case_sensitive: {}, forward: {}, normalize: {})",
            options.algorithm,
            query,
            pattern.case_sensitive(),
            options.forward,
            options.normalize
        );
        Self {
            query: query.to_string(),
            pattern,
            options,
        }
    }

    /// The query as given
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The prepared pattern
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The options this matcher was built with
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Match a decoded candidate line. Indices are character indices.
    pub fn match_runes(&self, input: &[char]) -> MatchResult {
        if self.options.normalize {
            let (normalized, mapping) = normalize_runes_with_char_mapping(input);
            let result = self.run(&normalized);
            map_span_to_original(result, &mapping, input.len())
        } else {
            self.run(input)
        }
    }

    /// Match a candidate line. Indices are character indices, not bytes.
    pub fn match_str(&self, input: &str) -> MatchResult {
        if self.options.normalize {
            let (normalized, mapping) = normalize_with_char_mapping(input);
            let result = self.run(&normalized);
            map_span_to_original(result, &mapping, input.chars().count())
        } else {
            let runes: Vec<char> = input.chars().collect();
            self.run(&runes)
        }
    }

    fn run(&self, input: &[char]) -> MatchResult {
        self.options.algorithm.run_with(
            self.options.boundary_reset,
            self.pattern.case_sensitive(),
            self.options.forward,
            input,
            self.pattern.runes(),
        )
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "({}|{}{})",
            self.options.algorithm,
            if self.options.forward { "" } else { "<" },
            self.query
        )
    }
}
