//! Property-based tests for fraction normalization and arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{gcd, to_proper, Fraction};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Finite fractions with a nonzero denominator
    fn finite() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    // Finite fractions, both infinities and NaN
    fn any_fraction() -> impl Strategy<Value = Fraction> {
        prop_oneof![
            8 => finite(),
            1 => Just(Fraction::INFINITY),
            1 => Just(Fraction::NEG_INFINITY),
            1 => Just(Fraction::NAN),
        ]
    }

    proptest! {
        // Proper form

        #[test]
        fn to_proper_is_lowest_terms(n in small_int(), d in small_int()) {
            prop_assume!(n != 0 || d != 0);
            let (num, den) = to_proper(n, d).unwrap();
            prop_assert!(den >= 0);
            if den > 0 {
                prop_assert_eq!(gcd(num, den), 1);
                // num/den == n/d
                prop_assert_eq!(num * d, n * den);
            } else {
                prop_assert_eq!(num, n.signum());
            }
        }

        #[test]
        fn to_proper_is_idempotent(n in small_int(), d in small_int()) {
            prop_assume!(n != 0 || d != 0);
            let (num, den) = to_proper(n, d).unwrap();
            prop_assert_eq!(to_proper(num, den).unwrap(), (num, den));
        }

        #[test]
        fn scaled_pairs_share_representation(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Fraction::new(n * k, d * k).unwrap(), Fraction::new(n, d).unwrap());
        }

        // Equality

        #[test]
        fn eq_reflexive_except_nan(a in any_fraction()) {
            prop_assert_eq!(a == a, !a.is_nan());
        }

        #[test]
        fn eq_symmetric(a in any_fraction(), b in any_fraction()) {
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn eq_transitive(a in finite(), b in finite(), c in finite()) {
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
        }

        // Field laws on finite values

        #[test]
        fn add_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn add_associative(a in finite(), b in finite(), c in finite()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn distributive(a in finite(), b in finite(), c in finite()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_self_is_zero(a in finite()) {
            prop_assert_eq!(a - a, Fraction::ZERO);
        }

        #[test]
        fn div_undoes_mul(a in finite(), n in non_zero_int(), d in non_zero_int()) {
            let b = Fraction::new(n, d).unwrap();
            prop_assert_eq!((a * b) / b, a);
        }

        // Sentinels

        #[test]
        fn nan_is_absorbing(a in any_fraction()) {
            prop_assert!((a + Fraction::NAN).is_nan());
            prop_assert!((Fraction::NAN - a).is_nan());
            prop_assert!((a * Fraction::NAN).is_nan());
            prop_assert!((Fraction::NAN / a).is_nan());
        }

        #[test]
        fn infinity_absorbs_finite_terms(a in finite()) {
            prop_assert_eq!(Fraction::INFINITY + a, Fraction::INFINITY);
            prop_assert_eq!(a - Fraction::INFINITY, Fraction::NEG_INFINITY);
            prop_assert_eq!(a / Fraction::INFINITY, Fraction::ZERO);
        }

        #[test]
        fn div_by_zero_takes_dividend_sign(n in non_zero_int()) {
            let q = Fraction::from_integer(n) / Fraction::ZERO;
            prop_assert!(q.is_infinite());
            prop_assert_eq!(q.signum(), n.signum());
        }

        // Ordering

        #[test]
        fn ordering_matches_f64(a in finite(), b in finite()) {
            prop_assume!(a != b);
            prop_assert_eq!(a > b, a.to_f64() > b.to_f64());
            prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
        }

        #[test]
        fn infinities_bound_finite_values(a in finite()) {
            prop_assert!(Fraction::NEG_INFINITY < a);
            prop_assert!(a < Fraction::INFINITY);
        }

        // Real conversion

        #[test]
        fn from_f64_round_trips_decimals(n in small_int(), places in 0u32..4) {
            let x = n as f64 / 10f64.powi(places as i32);
            let f = Fraction::from_f64(x).unwrap();
            prop_assert_eq!(f, Fraction::new(n, 10i64.pow(places)).unwrap());
        }
    }
}
