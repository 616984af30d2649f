//! Integer scalars: primitive signed integers and `dashu` big integers.

use dashu::integer::IBig;

use crate::traits::Scalar;

macro_rules! impl_scalar_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn zero() -> Self {
                    <$t as num_traits::Zero>::zero()
                }

                fn one() -> Self {
                    <$t as num_traits::One>::one()
                }

                fn is_zero(&self) -> bool {
                    num_traits::Zero::is_zero(self)
                }

                fn is_one(&self) -> bool {
                    num_traits::One::is_one(self)
                }

                fn checked_add(&self, other: &Self) -> Option<Self> {
                    num_traits::CheckedAdd::checked_add(self, other)
                }

                fn checked_sub(&self, other: &Self) -> Option<Self> {
                    num_traits::CheckedSub::checked_sub(self, other)
                }

                fn checked_mul(&self, other: &Self) -> Option<Self> {
                    num_traits::CheckedMul::checked_mul(self, other)
                }

                fn checked_neg(&self) -> Option<Self> {
                    num_traits::CheckedNeg::checked_neg(self)
                }
            }
        )*
    };
}

impl_scalar_for_primitive!(i8, i16, i32, i64, i128, isize);

impl Scalar for IBig {
    fn zero() -> Self {
        IBig::ZERO
    }

    fn one() -> Self {
        IBig::ONE
    }

    fn is_zero(&self) -> bool {
        *self == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        *self == IBig::ONE
    }
}
