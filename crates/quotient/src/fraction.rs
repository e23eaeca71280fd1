//! The fraction value type.
//!
//! Fractions are always stored in proper form, so every value has a unique
//! representation: `4/5`, `24/30` and `-20/-25` are stored identically.

use num_traits::{Inv, One, Zero};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{FractionError, Result};
use crate::proper::to_proper;
use crate::ratio::{to_ratio_with_limit, DEFAULT_MAX_DECIMAL_PLACES};

/// A rational number in lowest terms, extended with signed infinity and NaN.
///
/// The sign is carried by the numerator and the denominator is never
/// negative. A zero denominator marks a sentinel:
///
/// | numerator | denominator | value     |
/// |-----------|-------------|-----------|
/// | `1`       | `0`         | +infinity |
/// | `-1`      | `0`         | -infinity |
/// | `0`       | `0`         | NaN       |
///
/// Arithmetic is total: every operator returns a `Fraction`, with
/// undefined results such as `inf - inf` or `inf * 0` collapsing to NaN.
/// Like IEEE floats, NaN compares unequal to everything, itself included,
/// so `Fraction` implements `PartialEq`/`PartialOrd` but not `Eq`/`Ord`.
#[derive(Clone, Copy)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// The value `0`.
    pub const ZERO: Self = Self::raw(0, 1);
    /// The value `1`.
    pub const ONE: Self = Self::raw(1, 1);
    /// Positive infinity, `1/0`.
    pub const INFINITY: Self = Self::raw(1, 0);
    /// Negative infinity, `-1/0`.
    pub const NEG_INFINITY: Self = Self::raw(-1, 0);
    /// The indeterminate value, `0/0`.
    pub const NAN: Self = Self::raw(0, 0);

    /// Builds a fraction from a pair already known to be proper.
    pub(crate) const fn raw(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a fraction from a numerator and denominator, reducing it to
    /// proper form.
    ///
    /// A zero denominator with a nonzero numerator gives the infinity of the
    /// numerator's sign.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::BothZero`] for `new(0, 0)` and
    /// [`FractionError::Overflow`] when the reduced pair leaves the `i64`
    /// range (e.g. `new(i64::MIN, -1)`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        let (numerator, denominator) = to_proper(numerator, denominator)?;
        Ok(Self::raw(numerator, denominator))
    }

    /// Creates a fraction with denominator 1.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self::raw(n, 1)
    }

    /// Creates a fraction equal to `numerator / denominator` for real
    /// inputs.
    ///
    /// Each side is converted exactly through its decimal expansion and the
    /// two are divided with [`Fraction::checked_div`]. Infinite inputs map
    /// to the signed infinities and NaN maps to [`Fraction::NAN`], so
    /// `from_reals(0.0, 0.0)` is NaN rather than an error.
    ///
    /// ```
    /// use quotient::Fraction;
    ///
    /// let f = Fraction::from_reals(1.5, 0.25).unwrap();
    /// assert_eq!(f, Fraction::from_integer(6));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::OutOfRange`] if either value does not fit
    /// and [`FractionError::Overflow`] if the quotient does not.
    pub fn from_reals(numerator: f64, denominator: f64) -> Result<Self> {
        Self::from_f64(numerator)?.checked_div(Self::from_f64(denominator)?)
    }

    /// Creates a fraction equal to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::OutOfRange`] if the decimal expansion of `x`
    /// does not fit in `i64`.
    pub fn from_f64(x: f64) -> Result<Self> {
        Self::from_f64_with_limit(x, DEFAULT_MAX_DECIMAL_PLACES)
    }

    /// Creates a fraction equal to `x` rounded to `max_places` decimal
    /// places.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::OutOfRange`] if the decimal expansion of `x`
    /// does not fit in `i64`.
    pub fn from_f64_with_limit(x: f64, max_places: usize) -> Result<Self> {
        if x.is_nan() {
            return Ok(Self::NAN);
        }
        if x.is_infinite() {
            return Ok(if x > 0.0 {
                Self::INFINITY
            } else {
                Self::NEG_INFINITY
            });
        }
        let (numerator, denominator) = to_ratio_with_limit(x, max_places)?;
        Ok(Self::raw(numerator, denominator))
    }

    /// Returns the numerator. Carries the sign of the value.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Never negative; zero for sentinels.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Returns true if the value is greater than zero, infinity included.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    /// Returns true if the value is less than zero, negative infinity
    /// included.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Returns true if the value is exactly zero. NaN is not zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }

    /// Returns true for either signed infinity.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.denominator == 0 && self.numerator != 0
    }

    /// Returns true for the indeterminate value.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    /// Returns true for ordinary rationals.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.denominator != 0
    }

    /// Returns true if the value is a finite integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// Returns the sign: -1, 0, or 1. NaN has sign 0.
    #[must_use]
    pub const fn signum(self) -> i64 {
        self.numerator.signum()
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Returns `1 / self`. The reciprocal of zero is positive infinity and
    /// the reciprocal of either infinity is zero.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in `i64`.
    #[must_use]
    pub fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Converts to the nearest `f64`. Sentinels map to the IEEE infinities
    /// and NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else if self.is_infinite() {
            if self.is_positive() {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            }
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(*self)
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Inv for Fraction {
    type Output = Self;

    fn inv(self) -> Self::Output {
        self.recip()
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({self})")
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl PartialEq for Fraction {
    /// Representation equality. Proper form makes this value equality for
    /// rationals and infinities; NaN equals nothing.
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl PartialOrd for Fraction {
    /// Orders by cross-multiplication, which is valid because denominators
    /// are never negative. Returns `None` when either side is NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        // Both products are zero for two infinities.
        if self.is_infinite() && other.is_infinite() {
            return Some(self.numerator.cmp(&other.numerator));
        }
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        Some(lhs.cmp(&rhs))
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(x: f64) -> Result<Self> {
        Self::from_f64(x)
    }
}
