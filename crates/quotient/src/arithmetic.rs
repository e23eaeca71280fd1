//! Extended arithmetic over rationals, signed infinity and NaN.
//!
//! The `checked_*` methods are total over the sentinel values and only fail
//! when a finite result leaves the `i64` range. The operator traits call
//! them and panic on overflow, the way std integer operators do.
//!
//! Any NaN operand yields NaN.

use log::trace;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{FractionError, Result};
use crate::proper::reduce;
use crate::Fraction;

impl Fraction {
    fn wide(self) -> (i128, i128) {
        (i128::from(self.numerator()), i128::from(self.denominator()))
    }

    fn from_wide(numerator: i128, denominator: i128) -> Result<Self> {
        let (numerator, denominator) = reduce(numerator, denominator)?;
        Ok(Self::raw(numerator, denominator))
    }

    /// Adds two fractions with `a/b + c/d = (ad + bc) / bd`.
    ///
    /// Infinities are resolved first: two infinities of the same sign give
    /// that infinity, opposite signs give NaN, and an infinity absorbs any
    /// finite term.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        if self.is_nan() || rhs.is_nan() {
            return Ok(Self::NAN);
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) if self.numerator() == rhs.numerator() => return Ok(self),
            (true, true) => return Ok(Self::NAN),
            (true, false) => return Ok(self),
            (false, true) => return Ok(rhs),
            (false, false) => {}
        }

        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        let numerator = (a * d).checked_add(c * b).ok_or(FractionError::Overflow)?;
        Self::from_wide(numerator, b * d)
    }

    /// Subtracts with `a - b = a + (-b)`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if `rhs` cannot be negated or the
    /// result does not fit.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.checked_add(rhs.checked_neg()?)
    }

    /// Multiplies with `a/b * c/d = ac / bd`.
    ///
    /// The same formula covers infinities, since a zero denominator reduces
    /// to the infinity carrying the product of signs. `inf * 0` reduces to
    /// `0/0`, which is returned as NaN.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced product does not
    /// fit.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        match Self::from_wide(a * c, b * d) {
            Err(FractionError::BothZero) => {
                trace!("{self} * {rhs} is indeterminate");
                Ok(Self::NAN)
            }
            product => product,
        }
    }

    /// Divides with `a/b / c/d = ad / bc`.
    ///
    /// Special cases, in order:
    /// - `0 / 0` is NaN
    /// - a nonzero value over zero is the infinity with the dividend's sign
    /// - `inf / inf` is NaN
    /// - `inf / x` keeps the infinity, with its sign flipped for negative `x`
    /// - `x / inf` is zero
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced quotient does not
    /// fit.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if self.is_nan() || rhs.is_nan() {
            return Ok(Self::NAN);
        }
        if rhs.is_zero() {
            if self.is_zero() {
                return Ok(Self::NAN);
            }
            // Zero is always stored as 0/1, so there is no negative zero to
            // flip the sign.
            return Ok(Self::infinity(self.signum()));
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => return Ok(Self::NAN),
            (true, false) => return Ok(Self::infinity(self.signum() * rhs.signum())),
            (false, true) => return Ok(Self::ZERO),
            (false, false) => {}
        }

        let (a, b) = self.wide();
        let (c, d) = rhs.wide();
        Self::from_wide(a * d, b * c)
    }

    /// Negates the value. Infinities flip sign and NaN stays NaN.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the numerator is `i64::MIN`.
    pub fn checked_neg(self) -> Result<Self> {
        let numerator = self.numerator().checked_neg().ok_or(FractionError::Overflow)?;
        Ok(Self::raw(numerator, self.denominator()))
    }

    fn infinity(sign: i64) -> Self {
        if sign < 0 {
            Self::NEG_INFINITY
        } else {
            Self::INFINITY
        }
    }
}

#[cold]
fn overflow(op: &str, lhs: Fraction, rhs: Fraction, err: FractionError) -> ! {
    panic!("attempt to {op} {lhs} and {rhs}: {err}")
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(value) => value,
            Err(err) => overflow("add", self, rhs, err),
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl Add<i64> for Fraction {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self + Fraction::from_integer(rhs)
    }
}

impl Add<Fraction> for i64 {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Self::Output {
        Fraction::from_integer(self) + rhs
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<i64> for Fraction {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(value) => value,
            Err(err) => overflow("sub", self, rhs, err),
        }
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl Sub<i64> for Fraction {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self - Fraction::from_integer(rhs)
    }
}

impl Sub<Fraction> for i64 {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Self::Output {
        Fraction::from_integer(self) - rhs
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<i64> for Fraction {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(value) => value,
            Err(err) => overflow("mul", self, rhs, err),
        }
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        *self * *rhs
    }
}

impl Mul<i64> for Fraction {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self * Fraction::from_integer(rhs)
    }
}

impl Mul<Fraction> for i64 {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Self::Output {
        Fraction::from_integer(self) * rhs
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Fraction {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(value) => value,
            Err(err) => overflow("div", self, rhs, err),
        }
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        *self / *rhs
    }
}

impl Div<i64> for Fraction {
    type Output = Self;

    fn div(self, rhs: i64) -> Self::Output {
        self / Fraction::from_integer(rhs)
    }
}

impl Div<Fraction> for i64 {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Self::Output {
        Fraction::from_integer(self) / rhs
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<i64> for Fraction {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(value) => value,
            Err(err) => panic!("attempt to negate {self}: {err}"),
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}
