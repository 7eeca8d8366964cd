//! Prefix scoring of a recall attempt.

/// Count leading positions where `expected` and `actual` agree.
///
/// Stops at the first mismatch or when the shorter sequence runs out, so an
/// early transposition forfeits credit for everything after it.
pub fn prefix_score(expected: &[i64], actual: &[i64]) -> u32 {
    expected
        .iter()
        .zip(actual)
        .take_while(|(e, a)| e == a)
        .count() as u32
}
