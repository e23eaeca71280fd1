//! Reduction to proper form.
//!
//! A pair is proper when it is in lowest terms and the denominator is
//! non-negative. A zero denominator encodes the sentinels: `(1, 0)` and
//! `(-1, 0)` are the signed infinities, `(0, 0)` is NaN.

use crate::error::{FractionError, Result};

/// Computes the greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, 0)` is 0. The result is unsigned because `gcd(i64::MIN, 0)` is
/// `2^63`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> u64 {
    let g = gcd_wide(u128::from(a.unsigned_abs()), u128::from(b.unsigned_abs()));
    // Both inputs are at most 2^63, so the divisor is too.
    u64::try_from(g).unwrap_or(u64::MAX)
}

/// Converts `numerator` and `denominator` to their simplest ratio.
///
/// ```
/// use quotient::to_proper;
///
/// assert_eq!(to_proper(7, 28), Ok((1, 4)));
/// assert_eq!(to_proper(-36, 54), Ok((-2, 3)));
/// assert_eq!(to_proper(5, 0), Ok((1, 0)));
/// ```
///
/// # Errors
///
/// Returns [`FractionError::BothZero`] if both arguments are zero, and
/// [`FractionError::Overflow`] if the reduced numerator does not fit in an
/// `i64` (only `to_proper(i64::MIN, -1)` and friends).
pub fn to_proper(numerator: i64, denominator: i64) -> Result<(i64, i64)> {
    reduce(i128::from(numerator), i128::from(denominator))
}

/// Reduces a wide pair, as produced by cross-multiplication, and narrows it
/// back to `i64`.
pub(crate) fn reduce(numerator: i128, denominator: i128) -> Result<(i64, i64)> {
    if numerator == 0 {
        if denominator == 0 {
            return Err(FractionError::BothZero);
        }
        return Ok((0, 1));
    }
    if denominator == 0 {
        return Ok((if numerator > 0 { 1 } else { -1 }, 0));
    }

    let num = numerator.unsigned_abs();
    let den = denominator.unsigned_abs();
    let g = gcd_wide(num, den);
    let (num, den) = (num / g, den / g);

    let negative = (numerator < 0) != (denominator < 0);
    let num = i128::try_from(num).map_err(|_| FractionError::Overflow)?;
    let num = if negative { -num } else { num };

    Ok((
        i64::try_from(num).map_err(|_| FractionError::Overflow)?,
        i64::try_from(den).map_err(|_| FractionError::Overflow)?,
    ))
}

fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
