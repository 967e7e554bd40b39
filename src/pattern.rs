//! Query preparation.
//!
//! The strategies in [`crate::algo`] only fold the input side. [`Pattern`]
//! takes care of the other side: it resolves the case mode of a query and
//! lowercases the query once, so it can be matched against many lines.

use serde::{Deserialize, Serialize};

use crate::algo::util::to_lower;

#[derive(Eq, PartialEq, Debug, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
/// Case sensitivity mode for matching
pub enum CaseMatching {
    /// Case-sensitive matching
    Respect,
    /// Case-insensitive matching
    Ignore,
    /// Smart case: case-insensitive unless query contains uppercase
    #[default]
    Smart,
}

impl CaseMatching {
    /// Whether `query` should be matched case-sensitively under this mode.
    pub fn is_case_sensitive(self, query: &[char]) -> bool {
        match self {
            CaseMatching::Respect => true,
            CaseMatching::Ignore => false,
            CaseMatching::Smart => contains_upper(query),
        }
    }
}

fn contains_upper(query: &[char]) -> bool {
    query.iter().any(|ch| ch.is_uppercase())
}

/// A query ready to be handed to the matching strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    runes: Vec<char>,
    case_sensitive: bool,
}

impl Pattern {
    /// Prepare `query`, lowercasing it unless it is matched case-sensitively.
    pub fn new(query: &str, case: CaseMatching) -> Self {
        let runes: Vec<char> = query.chars().collect();
        Self::from_vec(runes, case)
    }

    /// Same as [`Pattern::new`] for an already decoded query.
    pub fn from_runes(query: &[char], case: CaseMatching) -> Self {
        Self::from_vec(query.to_vec(), case)
    }

    fn from_vec(mut runes: Vec<char>, case: CaseMatching) -> Self {
        let case_sensitive = case.is_case_sensitive(&runes);
        if !case_sensitive {
            runes.iter_mut().for_each(|ch| *ch = to_lower(*ch));
        }
        Self { runes, case_sensitive }
    }

    /// The pattern characters, lowercased when matching ignores case
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// The resolved case sensitivity
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of characters in the pattern
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Returns true for the empty query
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }
}
