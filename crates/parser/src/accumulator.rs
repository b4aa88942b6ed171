//! Positional accumulation and sign adjustment.
//!
//! `value = Σ digit[i] * radix^(n-1-i)`, evaluated in Horner form
//! (`acc = acc * radix + digit`) over exact integers. Every partial sum is
//! bounded by the caller's magnitude limit, so an out-of-range input is
//! reported as soon as the prefix exceeds it.

use numeral_core::Radix;

/// Largest magnitude a negative `i32` can carry (`2^31`).
pub const NEGATIVE_LIMIT: u32 = i32::MAX as u32 + 1;

/// Largest magnitude a non-negative `i32` can carry.
pub const POSITIVE_LIMIT: u32 = i32::MAX as u32;

/// Folds `digits` (most significant first) into a magnitude no larger than
/// `limit`. Returns `None` once a partial sum exceeds `limit`.
pub fn accumulate(digits: &[u8], radix: Radix, limit: u32) -> Option<u32> {
    let base = u64::from(radix.base());
    let limit = u64::from(limit);

    // acc <= 2^31 before each step, so acc * 16 + 15 stays far below u64::MAX.
    let magnitude = digits.iter().try_fold(0u64, |acc, &digit| {
        let next = acc * base + u64::from(digit);
        (next <= limit).then_some(next)
    })?;

    u32::try_from(magnitude).ok()
}

/// Applies the sign. `None` if the signed result leaves the `i32` range.
#[inline]
pub fn apply_sign(magnitude: u32, negative: bool) -> Option<i32> {
    let magnitude = i64::from(magnitude);
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

/// Magnitude limit for a value with the given sign.
#[inline]
pub const fn limit_for(negative: bool) -> u32 {
    if negative {
        NEGATIVE_LIMIT
    } else {
        POSITIVE_LIMIT
    }
}
