//! Property-based tests for the scalar implementations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{gaussian, rational, IBig, RBig, Scalar};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn small_rational() -> impl Strategy<Value = RBig> {
        (small_int(), 1i64..50i64).prop_map(|(n, d)| rational(n, d).unwrap_or(RBig::ZERO))
    }

    proptest! {
        #[test]
        fn big_integer_additive_inverse(a in small_int()) {
            let a = IBig::from(a);
            prop_assert!(Scalar::is_zero(&(a.clone() + (-a))));
        }

        #[test]
        fn rational_zero_identity(a in small_rational()) {
            prop_assert_eq!(a.clone() + <RBig as Scalar>::zero(), a);
        }

        #[test]
        fn rational_one_identity(a in small_rational()) {
            prop_assert_eq!(a.clone() * <RBig as Scalar>::one(), a);
        }

        #[test]
        fn negate_if_twice_is_identity(a in small_rational(), flip in any::<bool>()) {
            let twice = a.clone().checked_negate_if(flip).and_then(|b| b.checked_negate_if(flip));
            prop_assert_eq!(twice, Some(a));
        }

        #[test]
        fn checked_ops_match_wide_arithmetic(a in any::<i32>(), b in any::<i32>()) {
            let wide = i64::from(a) + i64::from(b);
            let expected = i32::try_from(wide).ok();
            prop_assert_eq!(Scalar::checked_add(&a, &b), expected);

            let wide = i64::from(a) * i64::from(b);
            let expected = i32::try_from(wide).ok();
            prop_assert_eq!(Scalar::checked_mul(&a, &b), expected);
        }

        #[test]
        fn gaussian_zero_test_is_exact(re in small_int(), im in small_int()) {
            let z = gaussian(re, im);
            prop_assert_eq!(Scalar::is_zero(&z), re == 0 && im == 0);
        }
    }
}
