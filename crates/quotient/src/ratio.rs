//! Real-to-ratio conversion.
//!
//! A finite `f64` is expanded to its shortest round-trip decimal form and
//! each decimal place shifts one power of ten from the value into the
//! denominator. The result is exact for every value whose decimal expansion
//! fits within the place limit. Beyond the limit the expansion is rounded
//! half-up at the last kept place, so values like `1.0 / 3.0` convert to
//! the nearest ratio with a power-of-ten denominator rather than looping.

use log::{debug, warn};

use crate::error::{FractionError, Result};
use crate::proper::reduce;

/// Largest number of decimal places kept by [`to_ratio`].
///
/// `10^18` is the largest power of ten that fits in an `i64` denominator.
pub const DEFAULT_MAX_DECIMAL_PLACES: usize = 18;

/// Converts `x` to a reduced `(numerator, denominator)` pair with a positive
/// denominator.
///
/// ```
/// use quotient::to_ratio;
///
/// assert_eq!(to_ratio(5.6), Ok((28, 5)));
/// assert_eq!(to_ratio(0.875), Ok((7, 8)));
/// assert_eq!(to_ratio(-0.048), Ok((-6, 125)));
/// ```
///
/// # Errors
///
/// Returns [`FractionError::OutOfRange`] if `x` is not finite or its
/// expansion does not fit in `i64`.
pub fn to_ratio(x: f64) -> Result<(i64, i64)> {
    to_ratio_with_limit(x, DEFAULT_MAX_DECIMAL_PLACES)
}

/// Like [`to_ratio`], keeping at most `max_places` decimal places.
///
/// `max_places` is clamped to [`DEFAULT_MAX_DECIMAL_PLACES`].
///
/// # Errors
///
/// Returns [`FractionError::OutOfRange`] if `x` is not finite or its
/// expansion does not fit in `i64`.
pub fn to_ratio_with_limit(x: f64, max_places: usize) -> Result<(i64, i64)> {
    if !x.is_finite() {
        return Err(FractionError::OutOfRange(x));
    }
    let max_places = max_places.min(DEFAULT_MAX_DECIMAL_PLACES);

    // `Display` for f64 never switches to exponent notation.
    let text = x.abs().to_string();
    let (int_digits, frac_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let kept = frac_digits.len().min(max_places);

    let out_of_range = || FractionError::OutOfRange(x);
    let mut numerator: i128 = 0;
    let mut denominator: i128 = 1;

    for digit in int_digits.bytes() {
        numerator = push_digit(numerator, digit).ok_or_else(out_of_range)?;
    }
    for digit in frac_digits.bytes().take(kept) {
        numerator = push_digit(numerator, digit).ok_or_else(out_of_range)?;
        denominator *= 10;
    }

    if let Some(&next) = frac_digits.as_bytes().get(kept) {
        warn!(
            "{x} has {} decimal places, rounding to {kept}",
            frac_digits.len()
        );
        if next >= b'5' {
            numerator = numerator.checked_add(1).ok_or_else(out_of_range)?;
        }
    }

    if x.is_sign_negative() {
        numerator = -numerator;
    }

    let ratio = reduce(numerator, denominator).map_err(|_| out_of_range())?;
    debug!("converted {x} to {}/{}", ratio.0, ratio.1);
    Ok(ratio)
}

fn push_digit(acc: i128, digit: u8) -> Option<i128> {
    acc.checked_mul(10)?.checked_add(i128::from(digit - b'0'))
}
