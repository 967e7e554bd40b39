//! Per-character helpers shared by every matching strategy.

/// Returns the character at logical position `index` of `runes`.
///
/// When `forward` is false the sequence is read right to left, so logical
/// index 0 is the last character. `len` must be `runes.len()`.
#[inline(always)]
pub fn rune_at(runes: &[char], index: usize, len: usize, forward: bool) -> char {
    if forward { runes[index] } else { runes[len - index - 1] }
}

/// Folds `ch` for comparison against an already lowercased pattern character.
///
/// ASCII uppercase letters are shifted directly; only characters outside the
/// ASCII range go through Unicode lowercasing.
#[inline(always)]
pub fn fold(ch: char, case_sensitive: bool) -> char {
    if case_sensitive {
        ch
    } else if ch.is_ascii_uppercase() {
        (ch as u8 + 32) as char
    } else if !ch.is_ascii() {
        to_lower(ch)
    } else {
        ch
    }
}

/// Simple (single character) Unicode lowercase mapping.
///
/// Multi-character mappings keep their first character, e.g. `İ` becomes `i`.
#[inline]
pub fn to_lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Length of `runes` once trailing whitespace and control characters are cut.
pub fn trim_end_len(runes: &[char]) -> usize {
    runes
        .iter()
        .rposition(|ch| !(ch.is_whitespace() || ch.is_control()))
        .map_or(0, |last| last + 1)
}

/// True for characters that continue a word for penalty purposes.
#[inline(always)]
pub fn is_word(ch: char) -> bool {
    ch.is_alphanumeric()
}
