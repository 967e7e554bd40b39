//! Strategies anchored to the start or end of the input.
//!
//! None of these model match quality, so the penalty is always 0. The
//! `forward` flag is accepted for a uniform signature and has no effect.

use crate::algo::MatchResult;
use crate::algo::util::{fold, trim_end_len};

/// Match when `input` starts with `pattern`.
pub fn prefix_match(case_sensitive: bool, _forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
    if input.len() < pattern.len() {
        return MatchResult::NONE;
    }

    if starts_with(case_sensitive, input, pattern) {
        MatchResult::span(0, pattern.len(), 0)
    } else {
        MatchResult::NONE
    }
}

/// Match when `input`, with trailing whitespace and control characters
/// removed, ends with `pattern`.
pub fn suffix_match(case_sensitive: bool, _forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
    let trimmed_len = trim_end_len(input);
    let Some(offset) = trimmed_len.checked_sub(pattern.len()) else {
        return MatchResult::NONE;
    };

    if starts_with(case_sensitive, &input[offset..trimmed_len], pattern) {
        MatchResult::span(offset, trimmed_len, 0)
    } else {
        MatchResult::NONE
    }
}

/// Match when `input` is `pattern`.
///
/// An empty pattern matches any input at `[0, 0)`, like the other strategies.
pub fn equal_match(case_sensitive: bool, _forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::empty_at(0);
    }
    if input.len() != pattern.len() {
        return MatchResult::NONE;
    }

    if starts_with(case_sensitive, input, pattern) {
        MatchResult::span(0, pattern.len(), 0)
    } else {
        MatchResult::NONE
    }
}

/// `input` must be at least as long as `pattern`.
#[inline]
fn starts_with(case_sensitive: bool, input: &[char], pattern: &[char]) -> bool {
    input
        .iter()
        .zip(pattern)
        .all(|(&ch, &pch)| fold(ch, case_sensitive) == pch)
}
