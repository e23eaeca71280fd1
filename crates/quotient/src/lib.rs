//! # quotient
//!
//! Exact rational numbers over `i64` with two sentinel families that keep
//! arithmetic total:
//! - signed infinity (`1/0` and `-1/0`)
//! - indeterminate, NaN-like values (`0/0`)
//!
//! Every value is stored in proper form: lowest terms, with the sign carried
//! by the numerator and a non-negative denominator. Each rational, both
//! infinities and NaN have exactly one representation.
//!
//! ```
//! use quotient::Fraction;
//!
//! let a = Fraction::new(60, 90).unwrap();
//! assert_eq!(a.to_string(), "2/3");
//!
//! let inf = Fraction::INFINITY;
//! assert_eq!(inf + Fraction::new(100, 7).unwrap(), inf);
//! assert!((inf + Fraction::NEG_INFINITY).is_nan());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod error;
pub mod fraction;
pub mod proper;
pub mod ratio;

#[cfg(test)]
mod proptests;

pub use error::{FractionError, Result};
pub use fraction::Fraction;
pub use proper::{gcd, to_proper};
pub use ratio::{to_ratio, to_ratio_with_limit, DEFAULT_MAX_DECIMAL_PLACES};
