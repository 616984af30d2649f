//! Blades: single basis monomials with an exact coefficient.
//!
//! Raw input such as `"3121"` is reduced to canonical form at construction:
//!
//! 1. Adjacent transpositions sort the indices; each swap flips the sign,
//!    since distinct orthogonal basis vectors anticommute.
//! 2. Adjacent repeated indices collapse through the metric:
//!    `e_i e_i` is +1, -1 or 0 depending on the form of direction `i`.
//!    A null direction annihilates the whole blade.

use std::fmt;

use clifra_scalar::Scalar;
use smallvec::SmallVec;
use tracing::trace;

use crate::basis::{digit_of, ordinal_of, BasisBlade};
use crate::error::{ensure_same_signature, CliffordError, Result};
use crate::multivector::Multivector;
use crate::signature::{Form, Signature};
use crate::source::{Operand, Sum};

/// Working buffer for raw, possibly repeated, index sequences.
type RawOrdinals = SmallVec<[u8; 16]>;

/// A canonical blade: strictly increasing indices, a coefficient and the
/// signature it was built under.
///
/// A zero coefficient always comes with empty indices; check
/// [`Blade::is_zero`] rather than the shape to detect zero.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Blade<S: Scalar> {
    indices: BasisBlade,
    scalar: S,
    signature: Signature,
}

impl<S: Scalar> Blade<S> {
    /// Builds a blade from a raw index string and reduces it to canonical
    /// form.
    ///
    /// # Errors
    ///
    /// - `InvalidIndex` if a character is not a digit `'1'..='9'`
    /// - `IndexOutOfRange` if an index exceeds the signature's dimension
    /// - `ScalarOverflow` if applying the sign overflows a fixed-width scalar
    ///
    /// # Example
    ///
    /// ```
    /// use clifra_core::{Blade, Signature};
    ///
    /// let sig = Signature::euclidean(3).unwrap();
    /// let b = Blade::new("21", 1i64, sig).unwrap();
    /// assert_eq!(b.indices(), "12");
    /// assert_eq!(*b.scalar(), -1);
    /// ```
    pub fn new(indices: &str, scalar: S, signature: Signature) -> Result<Self> {
        let (indices, scalar) = canonicalize(indices, scalar, signature)?;
        Ok(Self {
            indices,
            scalar,
            signature,
        })
    }

    /// A grade-0 blade holding `value`.
    #[must_use]
    pub fn scalar_blade(value: S, signature: Signature) -> Self {
        Self::from_parts(BasisBlade::scalar(), value, signature)
    }

    /// The zero blade.
    #[must_use]
    pub fn zero(signature: Signature) -> Self {
        Self::scalar_blade(S::zero(), signature)
    }

    /// Assembles a blade from already canonical indices.
    pub(crate) fn from_parts(indices: BasisBlade, scalar: S, signature: Signature) -> Self {
        let indices = if scalar.is_zero() {
            BasisBlade::scalar()
        } else {
            indices
        };
        Self {
            indices,
            scalar,
            signature,
        }
    }

    /// The canonical indices.
    #[must_use]
    pub fn indices(&self) -> &BasisBlade {
        &self.indices
    }

    /// The coefficient.
    #[must_use]
    pub fn scalar(&self) -> &S {
        &self.scalar
    }

    /// The signature the blade was built under.
    #[must_use]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Number of basis vectors in the blade.
    #[must_use]
    pub fn grade(&self) -> usize {
        self.indices.grade()
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.scalar.is_zero()
    }

    /// Returns true if the blade has no basis vectors.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.indices.is_scalar()
    }

    /// Negates the coefficient.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if the negation does not fit the scalar type.
    pub fn neg(&self) -> Result<Self> {
        let scalar = self.scalar.checked_neg().ok_or(CliffordError::ScalarOverflow)?;
        Ok(Self {
            indices: self.indices.clone(),
            scalar,
            signature: self.signature,
        })
    }

    /// Multiplies the coefficient by `c`.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if the product does not fit the scalar type.
    pub fn scale(&self, c: &S) -> Result<Self> {
        let scalar = self.scalar.checked_mul(c).ok_or(CliffordError::ScalarOverflow)?;
        Ok(Self::from_parts(self.indices.clone(), scalar, self.signature))
    }

    /// Adds a blade, multivector or scalar.
    ///
    /// Blades with identical indices sum to a single blade; every other
    /// combination promotes to a multivector.
    ///
    /// # Errors
    ///
    /// Returns `MetricMismatch` if `other` was built under a different
    /// signature, or `ScalarOverflow` if a summed coefficient does not fit
    /// the scalar type.
    pub fn add(&self, other: impl Into<Operand<S>>) -> Result<Sum<S>> {
        let other: Operand<S> = other.into();
        match other {
            Operand::Scalar(value) => Ok(Sum::Multivector(Multivector::from_terms(
                self.signature,
                [self.to_term(), (BasisBlade::scalar(), value)],
            )?)),
            Operand::Blade(other) => {
                ensure_same_signature(self.signature, other.signature)?;
                if self.indices == other.indices {
                    let scalar = self
                        .scalar
                        .checked_add(&other.scalar)
                        .ok_or(CliffordError::ScalarOverflow)?;
                    Ok(Sum::Blade(Self::from_parts(self.indices.clone(), scalar, self.signature)))
                } else {
                    Ok(Sum::Multivector(Multivector::from_terms(
                        self.signature,
                        [self.to_term(), other.into_term()],
                    )?))
                }
            }
            Operand::Multivector(other) => {
                ensure_same_signature(self.signature, other.signature())?;
                Ok(Sum::Multivector(other.add(self.clone())?))
            }
        }
    }

    /// Converts into a single-term multivector (or zero).
    #[must_use]
    pub fn into_multivector(self) -> Multivector<S> {
        if self.is_zero() {
            return Multivector::zero(self.signature);
        }
        let signature = self.signature;
        Multivector::from_canonical(signature, vec![self.into_term()])
    }

    pub(crate) fn to_term(&self) -> (BasisBlade, S) {
        (self.indices.clone(), self.scalar.clone())
    }

    pub(crate) fn into_term(self) -> (BasisBlade, S) {
        (self.indices, self.scalar)
    }
}

impl<S: Scalar + fmt::Display> fmt::Display for Blade<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indices.is_scalar() {
            write!(f, "{}", self.scalar)
        } else if self.scalar.is_one() {
            write!(f, "e{}", self.indices)
        } else if self.scalar == -S::one() {
            write!(f, "-e{}", self.indices)
        } else {
            write!(f, "{}*e{}", self.scalar, self.indices)
        }
    }
}

/// Reduces a raw index string and coefficient to canonical form.
///
/// # Errors
///
/// `InvalidIndex` for any non-digit character (checked over the whole
/// string first), then `IndexOutOfRange` for any index beyond the
/// signature's dimension. `ScalarOverflow` if the sign cannot be applied.
pub(crate) fn canonicalize<S: Scalar>(
    raw: &str,
    scalar: S,
    signature: Signature,
) -> Result<(BasisBlade, S)> {
    let ordinals = raw
        .chars()
        .map(|c| ordinal_of(c).ok_or(CliffordError::InvalidIndex { index: c }))
        .collect::<Result<RawOrdinals>>()?;

    let dimension = signature.dimension();
    if let Some(&ordinal) = ordinals.iter().find(|&&o| usize::from(o) >= dimension) {
        return Err(CliffordError::IndexOutOfRange {
            index: digit_of(ordinal),
            dimension,
        });
    }

    reduce(ordinals, scalar, signature)
}

/// Sorts, then collapses repeated indices through the metric.
fn reduce<S: Scalar>(
    mut ordinals: RawOrdinals,
    scalar: S,
    signature: Signature,
) -> Result<(BasisBlade, S)> {
    let swaps = bubble_sort(&mut ordinals);
    let mut negate = swaps % 2 == 1;

    let mut i = 0;
    while i + 1 < ordinals.len() {
        let ordinal = ordinals[i];
        if ordinal != ordinals[i + 1] {
            i += 1;
            continue;
        }

        match signature.form(usize::from(ordinal)) {
            None => {
                return Err(CliffordError::IndexOutOfRange {
                    index: digit_of(ordinal),
                    dimension: signature.dimension(),
                });
            }
            Some(Form::Null) => {
                trace!(index = %digit_of(ordinal), "blade annihilated by null direction");
                return Ok((BasisBlade::scalar(), S::zero()));
            }
            Some(Form::Negative) => negate = !negate,
            Some(Form::Positive) => {}
        }

        // The pair is dropped; the next pair is tested at the same position.
        ordinals.drain(i..i + 2);
    }

    let scalar = scalar
        .checked_negate_if(negate)
        .ok_or(CliffordError::ScalarOverflow)?;
    if scalar.is_zero() {
        return Ok((BasisBlade::scalar(), scalar));
    }

    Ok((BasisBlade::from_sorted(&ordinals), scalar))
}

/// Stable adjacent-transposition sort; returns the number of swaps.
fn bubble_sort(ordinals: &mut [u8]) -> usize {
    let n = ordinals.len();
    let mut swaps = 0;

    for pass in 0..n {
        for j in 0..n - pass - 1 {
            if ordinals[j] > ordinals[j + 1] {
                ordinals.swap(j, j + 1);
                swaps += 1;
            }
        }
    }

    swaps
}
