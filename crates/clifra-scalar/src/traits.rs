//! The scalar trait.
//!
//! Blades and multivectors are generic over their coefficient type. The only
//! operations the algebra needs are ring arithmetic and an exact test for
//! zero, so that merged terms can be pruned without tolerance.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact scalar: a commutative ring element with a reliable zero test.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Every element has an additive inverse (`neg`)
/// - `is_zero` returns true exactly for values equal to `zero()`
pub trait Scalar:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Adds, returning `None` if the result does not fit the type.
    ///
    /// Exact types never overflow; fixed-width integers override this.
    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(self.clone() + other.clone())
    }

    /// Subtracts, returning `None` if the result does not fit the type.
    fn checked_sub(&self, other: &Self) -> Option<Self> {
        Some(self.clone() - other.clone())
    }

    /// Multiplies, returning `None` if the result does not fit the type.
    fn checked_mul(&self, other: &Self) -> Option<Self> {
        Some(self.clone() * other.clone())
    }

    /// Negates, returning `None` if the result does not fit the type.
    fn checked_neg(&self) -> Option<Self> {
        Some(-self.clone())
    }

    /// Negates the value when `flip` is set.
    ///
    /// Used to apply the sign of a permutation or of a negative square.
    fn checked_negate_if(self, flip: bool) -> Option<Self> {
        if flip {
            self.checked_neg()
        } else {
            Some(self)
        }
    }
}
