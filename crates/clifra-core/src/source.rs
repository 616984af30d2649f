//! Construction dispatch.
//!
//! Multivectors can be built from several input shapes. Each shape is an
//! explicit [`Source`] variant, validated on its own and then handed to the
//! single normalization routine in [`Multivector::new`].
//!
//! [`Operand`] and [`Sum`] play the same role for addition.

use clifra_scalar::Scalar;

use crate::blade::Blade;
use crate::error::{CliffordError, Result};
use crate::multivector::Multivector;

/// Input accepted by [`Multivector::new`].
#[derive(Clone, PartialEq, Debug)]
pub enum Source<S: Scalar> {
    /// An existing multivector, copied as is.
    Multivector(Multivector<S>),
    /// A list of blades; the signature is taken from the first blade when
    /// none is given.
    Blades(Vec<Blade<S>>),
    /// Raw index strings with their coefficients. Requires a signature.
    Terms(Vec<(String, S)>),
    /// A single blade.
    Blade(Blade<S>),
    /// A single raw index string with its coefficient. Requires a signature.
    Term(String, S),
    /// A bare scalar. Requires a signature.
    Scalar(S),
}

impl<S: Scalar> From<Multivector<S>> for Source<S> {
    fn from(value: Multivector<S>) -> Self {
        Self::Multivector(value)
    }
}

impl<S: Scalar> From<Vec<Blade<S>>> for Source<S> {
    fn from(value: Vec<Blade<S>>) -> Self {
        Self::Blades(value)
    }
}

impl<S: Scalar> From<Blade<S>> for Source<S> {
    fn from(value: Blade<S>) -> Self {
        Self::Blade(value)
    }
}

impl<S: Scalar> From<Vec<(String, S)>> for Source<S> {
    fn from(value: Vec<(String, S)>) -> Self {
        Self::Terms(value)
    }
}

impl<S: Scalar> From<(&str, S)> for Source<S> {
    fn from((indices, scalar): (&str, S)) -> Self {
        Self::Term(indices.to_owned(), scalar)
    }
}

/// A raw index string on its own carries a unit coefficient.
impl<S: Scalar> From<&str> for Source<S> {
    fn from(indices: &str) -> Self {
        Self::Term(indices.to_owned(), S::one())
    }
}

/// A list of raw index strings, each with a unit coefficient.
impl<S: Scalar> From<Vec<&str>> for Source<S> {
    fn from(value: Vec<&str>) -> Self {
        Self::Terms(
            value
                .into_iter()
                .map(|indices| (indices.to_owned(), S::one()))
                .collect(),
        )
    }
}

/// Right-hand side of an addition.
#[derive(Clone, PartialEq, Debug)]
pub enum Operand<S: Scalar> {
    /// A bare scalar, treated as a grade-0 blade of the left operand's
    /// signature.
    Scalar(S),
    /// A blade.
    Blade(Blade<S>),
    /// A multivector.
    Multivector(Multivector<S>),
}

impl<S: Scalar> Operand<S> {
    /// Negates the operand.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if a coefficient cannot be negated within
    /// the scalar type.
    pub fn neg(self) -> Result<Self> {
        Ok(match self {
            Operand::Scalar(value) => {
                Operand::Scalar(value.checked_neg().ok_or(CliffordError::ScalarOverflow)?)
            }
            Operand::Blade(blade) => Operand::Blade(blade.neg()?),
            Operand::Multivector(mv) => Operand::Multivector(mv.neg()?),
        })
    }
}

impl<S: Scalar> From<Blade<S>> for Operand<S> {
    fn from(value: Blade<S>) -> Self {
        Self::Blade(value)
    }
}

impl<S: Scalar> From<&Blade<S>> for Operand<S> {
    fn from(value: &Blade<S>) -> Self {
        Self::Blade(value.clone())
    }
}

impl<S: Scalar> From<Multivector<S>> for Operand<S> {
    fn from(value: Multivector<S>) -> Self {
        Self::Multivector(value)
    }
}

impl<S: Scalar> From<&Multivector<S>> for Operand<S> {
    fn from(value: &Multivector<S>) -> Self {
        Self::Multivector(value.clone())
    }
}

/// Result of adding to a blade: a blade when the indices agree, otherwise a
/// multivector.
#[derive(Clone, PartialEq, Debug)]
pub enum Sum<S: Scalar> {
    /// Both operands had the same indices.
    Blade(Blade<S>),
    /// The operands were promoted to a multivector.
    Multivector(Multivector<S>),
}

impl<S: Scalar> Sum<S> {
    /// Converts the sum to a multivector.
    #[must_use]
    pub fn into_multivector(self) -> Multivector<S> {
        match self {
            Sum::Blade(blade) => blade.into_multivector(),
            Sum::Multivector(mv) => mv,
        }
    }

    /// Returns the blade if the sum stayed a single blade.
    #[must_use]
    pub fn as_blade(&self) -> Option<&Blade<S>> {
        match self {
            Sum::Blade(blade) => Some(blade),
            Sum::Multivector(_) => None,
        }
    }

    /// Returns the multivector if the sum was promoted.
    #[must_use]
    pub fn as_multivector(&self) -> Option<&Multivector<S>> {
        match self {
            Sum::Blade(_) => None,
            Sum::Multivector(mv) => Some(mv),
        }
    }
}
