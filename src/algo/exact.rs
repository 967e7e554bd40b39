use crate::algo::MatchResult;
use crate::algo::util::{fold, rune_at};

/// Naive substring search that handles case sensitivity.
///
/// Each failed attempt restarts one position after where it began, with no
/// skip tables and no folded copy of the input. The penalty is always 0.
pub fn exact_match_naive(case_sensitive: bool, forward: bool, input: &[char], pattern: &[char]) -> MatchResult {
    if pattern.is_empty() {
        return MatchResult::empty_at(0);
    }

    let len_input = input.len();
    let len_pattern = pattern.len();
    if len_input < len_pattern {
        return MatchResult::NONE;
    }

    let mut pidx = 0;
    let mut index = 0;
    while index < len_input {
        let ch = fold(rune_at(input, index, len_input, forward), case_sensitive);
        if ch == rune_at(pattern, pidx, len_pattern, forward) {
            pidx += 1;
            if pidx == len_pattern {
                let (start, end) = (index + 1 - len_pattern, index + 1);
                return if forward {
                    MatchResult::span(start, end, 0)
                } else {
                    MatchResult::span(len_input - end, len_input - start, 0)
                };
            }
        } else {
            // retry from one past the start of the failed attempt
            index -= pidx;
            pidx = 0;
        }
        index += 1;
    }

    MatchResult::NONE
}
