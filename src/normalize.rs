//! Diacritic-insensitive matching support.
//!
//! Text is decomposed (NFD) and combining marks are dropped, so `café`
//! matches `cafe`. Spans found on the normalized text are mapped back to
//! character indices of the original text.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::algo::MatchResult;

/// Normalize a string and return a mapping from normalized char indices to original char indices.
///
/// Returns (normalized_chars, mapping) where mapping[i] gives the original char index
/// for the i-th character in the normalized sequence.
pub fn normalize_with_char_mapping(s: &str) -> (Vec<char>, Vec<usize>) {
    normalize_chars(s.chars(), s.len())
}

/// Same as [`normalize_with_char_mapping`] for decoded text.
pub fn normalize_runes_with_char_mapping(runes: &[char]) -> (Vec<char>, Vec<usize>) {
    normalize_chars(runes.iter().copied(), runes.len())
}

fn normalize_chars(chars: impl Iterator<Item = char>, capacity: usize) -> (Vec<char>, Vec<usize>) {
    let mut normalized = Vec::with_capacity(capacity);
    let mut mapping = Vec::with_capacity(capacity);

    for (orig_char_idx, orig_char) in chars.enumerate() {
        for decomposed_char in orig_char.nfd() {
            if !is_combining_mark(decomposed_char) {
                normalized.push(decomposed_char);
                mapping.push(orig_char_idx);
            }
        }
    }

    (normalized, mapping)
}

/// Normalize a query; no mapping is needed on that side.
pub fn normalize(s: &str) -> String {
    s.nfd().filter(|&ch| !is_combining_mark(ch)).collect()
}

/// Map a result computed on normalized text back to the original text.
///
/// `original_len` is the number of characters of the original text. The end
/// of the span moves past combining marks that were dropped after the last
/// matched character.
pub fn map_span_to_original(result: MatchResult, mapping: &[usize], original_len: usize) -> MatchResult {
    let Some(range) = result.range() else {
        return MatchResult::NONE;
    };

    let start = mapping.get(range.start).copied().unwrap_or(original_len);
    let end = match range.end.checked_sub(1).and_then(|last| mapping.get(last)) {
        Some(_) if range.is_empty() => start,
        Some(&last) => {
            let next = mapping.get(range.end).copied().unwrap_or(original_len);
            next.max(last + 1)
        }
        None => start,
    };

    MatchResult::span(start, end, result.penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_combining_marks() {
        let (normalized, mapping) = normalize_with_char_mapping("café");
        assert_eq!(normalized, vec!['c', 'a', 'f', 'e']);
        assert_eq!(mapping, vec![0, 1, 2, 3]);

        // already decomposed: 'e' followed by U+0301
        let (normalized, mapping) = normalize_with_char_mapping("e\u{301}x");
        assert_eq!(normalized, vec!['e', 'x']);
        assert_eq!(mapping, vec![0, 2]);

        assert_eq!(normalize("Ümlaut"), "Umlaut");
        assert_eq!(
            normalize_runes_with_char_mapping(&['ñ', 'a']),
            (vec!['n', 'a'], vec![0, 1])
        );
    }

    #[test]
    fn maps_spans_back() {
        let (_, mapping) = normalize_with_char_mapping("e\u{301}xy");
        assert_eq!(
            map_span_to_original(MatchResult::new(0, 2, 4), &mapping, 4),
            MatchResult::new(0, 3, 4)
        );
        assert_eq!(
            map_span_to_original(MatchResult::new(1, 3, 0), &mapping, 4),
            MatchResult::new(2, 4, 0)
        );
        assert_eq!(
            map_span_to_original(MatchResult::new(3, 3, 0), &mapping, 4),
            MatchResult::new(4, 4, 0)
        );
        assert_eq!(map_span_to_original(MatchResult::NONE, &mapping, 4), MatchResult::NONE);

        // a syllable decomposes into several jamo sharing one original index
        let (normalized, mapping) = normalize_with_char_mapping("한글");
        assert_eq!(mapping.len(), normalized.len());
        assert_eq!(
            map_span_to_original(MatchResult::new(0, 1, 0), &mapping, 2),
            MatchResult::new(0, 1, 0)
        );
        assert_eq!(
            map_span_to_original(MatchResult::new(1, 4, 0), &mapping, 2),
            MatchResult::new(0, 2, 0)
        );
    }
}
