//! Fuzzy subsequence matching with a word-boundary penalty.
//!
//! The match is found in three passes, none of which reads the input past
//! the end of the match:
//!
//! 1. a greedy scan in the requested direction stops at the first position
//!    where the whole pattern has been seen;
//! 2. a reverse scan from there moves the start as late as possible, so
//!    `x_ab_abc` / `abc` yields `abc` rather than `ab_abc`;
//! 3. a penalty scan runs forward from the beginning of the input to the end
//!    of the match.
//!
//! The penalty scan needs the characters in front of the match as well, since
//! the distance of a matched character from its word boundary depends on them.

use serde::{Deserialize, Serialize};

use crate::algo::MatchResult;
use crate::algo::util::{fold, is_word, rune_at};

/// When a match resets the distance-from-boundary counter.
///
/// Scoring policy of the penalty scan. With `Never`, a second match inside
/// the same word is charged its full distance from the word start; the other
/// two charge it only the distance from the previous match.
///
/// `Never` is the default because it is the scoring the matcher has always
/// had: `fooBarbaz` / `oBZ` scores 9 and `foo barbaz` / `fbb` scores 6. Under
/// `Immediate` the first drops to 8, and both reset policies give the second 5.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum BoundaryReset {
    /// Matches never reset the counter
    #[default]
    Never,
    /// Reset after a match that starts a run of consecutive matches
    NonConsecutive,
    /// Reset after every match
    Immediate,
}

/// Fuzzy match with the default [`BoundaryReset`] policy.
///
/// Returns the tightest span ending at the first position where the whole
/// pattern has been seen, along with its penalty.
pub fn fuzzy_match(case_sensitive: bool, forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
    fuzzy_match_with(BoundaryReset::default(), case_sensitive, forward, input, pattern)
}

/// Fuzzy match with an explicit [`BoundaryReset`] policy.
pub fn fuzzy_match_with(
    reset: BoundaryReset,
    case_sensitive: bool,
    forward: bool,
    input: &[char],
    pattern: &[char],
) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::empty_at(0);
    }

    let len_input = input.len();
    let len_pattern = pattern.len();
    if len_input < len_pattern {
        return MatchResult::NONE;
    }

    let mut pidx = 0;
    let mut sidx = None;
    let mut eidx = None;
    for index in 0..len_input {
        let ch = fold(rune_at(input, index, len_input, forward), case_sensitive);
        if ch == rune_at(pattern, pidx, len_pattern, forward) {
            if sidx.is_none() {
                sidx = Some(index);
            }
            pidx += 1;
            if pidx == len_pattern {
                eidx = Some(index + 1);
                break;
            }
        }
    }

    let (Some(mut sidx), Some(eidx)) = (sidx, eidx) else {
        return MatchResult::NONE;
    };

    // the greedy start may belong to a longer match than necessary
    let mut pidx = len_pattern;
    for index in (sidx..eidx).rev() {
        let ch = fold(rune_at(input, index, len_input, forward), case_sensitive);
        if ch == rune_at(pattern, pidx - 1, len_pattern, forward) {
            pidx -= 1;
            if pidx == 0 {
                sidx = index;
                break;
            }
        }
    }

    let (start, end) = if forward {
        (sidx, eidx)
    } else {
        (len_input - eidx, len_input - sidx)
    };

    let penalty = boundary_penalty(reset, case_sensitive, input, pattern, start, end);
    MatchResult::span(start, end, penalty)
}

/// Penalty of the match of `pattern` inside `input[start..end]`.
///
/// `distance` counts word characters since the last boundary. Non-word
/// characters set it to 0 and a lowercase to uppercase transition sets it
/// to 1. Each run of consecutive matched characters adds the distance of its
/// first character.
fn boundary_penalty(
    reset: BoundaryReset,
    case_sensitive: bool,
    input: &[char],
    pattern: &[char],
    start: usize,
    end: usize,
) -> i32 {
    let mut distance: i32 = 0;
    let mut penalty: i32 = 0;
    let mut consecutive = false;
    let mut prev_lower = false;
    let mut pidx = 0;

    for (index, &raw) in input[..end].iter().enumerate() {
        if is_word(raw) {
            if prev_lower && raw.is_uppercase() {
                distance = 1;
            } else {
                distance = distance.saturating_add(1);
            }
        } else {
            distance = 0;
        }
        prev_lower = raw.is_lowercase();

        if index < start {
            continue;
        }

        if fold(raw, case_sensitive) == pattern[pidx] {
            if !consecutive {
                penalty = penalty.saturating_add(distance);
            }
            match reset {
                BoundaryReset::Never => {}
                BoundaryReset::NonConsecutive if consecutive => {}
                BoundaryReset::NonConsecutive | BoundaryReset::Immediate => distance = 0,
            }
            pidx += 1;
            if pidx == pattern.len() {
                break;
            }
            consecutive = true;
        } else {
            consecutive = false;
        }
    }

    penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(reset: BoundaryReset, input: &str, pattern: &str) -> (isize, isize, i32) {
        let input: Vec<char> = input.chars().collect();
        let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
        let res = fuzzy_match_with(reset, false, true, &input, &pattern);
        (res.start, res.end, res.penalty)
    }

    #[test]
    fn reset_policies_agree_across_words() {
        for reset in [
            BoundaryReset::Never,
            BoundaryReset::NonConsecutive,
            BoundaryReset::Immediate,
        ] {
            assert_eq!(check(reset, "foo bar baz", "fbb"), (0, 9, 3));
            assert_eq!(check(reset, "FooBarBaz", "fbb"), (0, 7, 3));
        }
    }

    #[test]
    fn reset_policies_differ_inside_a_word() {
        assert_eq!(check(BoundaryReset::Never, "foo barbaz", "fbb"), (0, 8, 6));
        assert_eq!(check(BoundaryReset::NonConsecutive, "foo barbaz", "fbb"), (0, 8, 5));
        assert_eq!(check(BoundaryReset::Immediate, "foo barbaz", "fbb"), (0, 8, 5));
    }

    #[test]
    fn reset_policies_differ_after_a_run() {
        assert_eq!(check(BoundaryReset::Never, "fooBarbaz", "oBZ"), (2, 9, 9));
        assert_eq!(check(BoundaryReset::NonConsecutive, "fooBarbaz", "oBZ"), (2, 9, 9));
        assert_eq!(check(BoundaryReset::Immediate, "fooBarbaz", "oBZ"), (2, 9, 8));
    }

    #[test]
    fn tightening_moves_the_start() {
        // greedy start is the first 'a', the tightest match is the last "abc"
        assert_eq!(check(BoundaryReset::Never, "a_____b___abc__", "abc"), (10, 13, 1));
    }

    #[test]
    fn camel_case_hump_is_a_boundary() {
        assert_eq!(check(BoundaryReset::Never, "src/fuzzyMatch.rs", "fm"), (4, 10, 2));
        assert_eq!(check(BoundaryReset::Never, "src/fuzzymatch.rs", "fm"), (4, 10, 7));
    }

    #[test]
    fn pattern_longer_than_input() {
        assert_eq!(check(BoundaryReset::Never, "foo", "fooo"), (-1, -1, 0));
        assert_eq!(check(BoundaryReset::Never, "", "f"), (-1, -1, 0));
    }

    #[test]
    fn unicode_input_is_folded() {
        assert_eq!(check(BoundaryReset::Never, "Ärger Über", "äü"), (0, 7, 2));
    }
}
