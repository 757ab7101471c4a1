//! Roundness scoring for tick values.
//!
//! Scores only rank candidates against each other. The tiers are:
//!
//! - zero: 30
//! - integers: 20, plus 3 per trailing zero and a last-digit bonus
//! - everything else: `10 - 2 * decimals` (at least 1), plus the same bonus
//!
//! The last-digit bonus prefers 5 (+2) over even digits (+1) over odd ones.

use super::format::format_general;

/// Score of an exact zero.
pub const ZERO_SCORE: u32 = 30;

/// Base score of any non-zero integer.
pub const INTEGER_BASE: u32 = 20;

/// Extra score per trailing zero of an integer.
pub const TRAILING_ZERO_BONUS: u32 = 3;

/// Score of values whose ten-digit rendering has no decimal point.
const NO_FRACTION_SCORE: u32 = 15;

/// Integers at or above this magnitude are scored as rendered text.
const INTEGER_LIMIT: f64 = 1e15;

fn last_digit_bonus(digits: &str) -> u32 {
    match digits.chars().last().and_then(|c| c.to_digit(10)) {
        Some(5) => 2,
        Some(d) if d % 2 == 0 => 1,
        _ => 0,
    }
}

/// How "round" `value` looks as a tick label; higher is rounder.
///
/// ```
/// use climplot::ticks::roundness_score;
/// assert!(roundness_score(0.0) > roundness_score(100.0));
/// assert!(roundness_score(100.0) > roundness_score(123.0));
/// assert!(roundness_score(1.0) > roundness_score(1.5));
/// ```
pub fn roundness_score(value: f64) -> u32 {
    if value == 0.0 {
        return ZERO_SCORE;
    }

    let magnitude = value.abs();

    if magnitude.is_finite() && magnitude.fract() == 0.0 && magnitude < INTEGER_LIMIT {
        let digits = (magnitude as u64).to_string();
        let significant = digits.trim_end_matches('0');
        let trailing_zeros = (digits.len() - significant.len()) as u32;
        return INTEGER_BASE + trailing_zeros * TRAILING_ZERO_BONUS + last_digit_bonus(significant);
    }

    let text = format_general(magnitude, 10);
    match text.split_once('.') {
        Some((_, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let base = (10 - 2 * fraction.len() as i64).max(1) as u32;
            base + last_digit_bonus(fraction)
        }
        None => NO_FRACTION_SCORE,
    }
}
