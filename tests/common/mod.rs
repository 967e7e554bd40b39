use runematch::MatchResult;

/// Signature shared by every matching strategy
pub type MatchFn = fn(bool, bool, &[char], &[char]) -> MatchResult;

pub fn runes(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Run `fun`, lowercasing the pattern first when matching ignores case.
pub fn run(fun: MatchFn, case_sensitive: bool, forward: bool, input: &str, pattern: &str) -> MatchResult {
    let pattern = if case_sensitive {
        runes(pattern)
    } else {
        runes(&pattern.to_lowercase())
    };
    fun(case_sensitive, forward, &runes(input), &pattern)
}

/// `assert_match!(fun, case_sensitive, forward, input, pattern => start, end, penalty)`
#[macro_export]
macro_rules! assert_match {
    ($fun:expr, $case:expr, $forward:expr, $input:expr, $pattern:expr => $start:expr, $end:expr, $penalty:expr) => {
        assert_eq!(
            $crate::common::run($fun, $case, $forward, $input, $pattern),
            runematch::MatchResult::new($start, $end, $penalty),
            "{} / {} (case_sensitive: {}, forward: {})",
            $input,
            $pattern,
            $case,
            $forward
        )
    };
}
