//! Rational scalars backed by `dashu`.

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::traits::Scalar;

impl Scalar for RBig {
    fn zero() -> Self {
        RBig::ZERO
    }

    fn one() -> Self {
        RBig::ONE
    }

    fn is_zero(&self) -> bool {
        *self == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        *self == RBig::ONE
    }
}

/// Creates the rational `numerator / denominator` in lowest terms.
///
/// Returns `None` if the denominator is zero.
#[must_use]
pub fn rational(numerator: i64, denominator: i64) -> Option<RBig> {
    if denominator == 0 {
        return None;
    }

    let num = if denominator < 0 {
        -IBig::from(numerator)
    } else {
        IBig::from(numerator)
    };

    Some(RBig::from_parts(num, UBig::from(denominator.unsigned_abs())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_lowest_terms() {
        assert_eq!(rational(2, 4), rational(1, 2));
        assert_eq!(rational(3, -6), rational(-1, 2));
        assert_eq!(rational(1, 0), None);
    }

    #[test]
    fn test_exact_cancellation() {
        let third = rational(1, 3).unwrap();
        let sum = third.clone() + third.clone() + third;
        assert!(Scalar::is_one(&sum));

        let zero = sum.clone() - sum;
        assert!(Scalar::is_zero(&zero));
    }
}
