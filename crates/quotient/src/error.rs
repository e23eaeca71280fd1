//! Error type shared by construction and checked arithmetic.

use thiserror::Error;

/// Errors that can occur while building or combining fractions.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum FractionError {
    /// Numerator and denominator were both zero on the integer path.
    #[error("numerator and denominator cannot both be zero")]
    BothZero,

    /// The reduced result does not fit in an `i64` numerator/denominator.
    #[error("fraction arithmetic overflowed the i64 range")]
    Overflow,

    /// A real value whose decimal expansion does not fit in `i64`.
    #[error("{0} cannot be represented as a ratio of i64 values")]
    OutOfRange(f64),
}

/// Result alias for fallible fraction operations.
pub type Result<T> = std::result::Result<T, FractionError>;
