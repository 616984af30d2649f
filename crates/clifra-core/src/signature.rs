//! Metric signatures Cl(p, q, r).
//!
//! A signature fixes how each basis vector squares:
//! - the first `p` directions square to +1
//! - the next `q` directions square to -1
//! - the final `r` directions square to 0 (degenerate / null)
//!
//! Basis vectors are named by a single digit, so at most nine directions
//! are supported.

use std::fmt;

use clifra_scalar::Scalar;

use crate::basis::BasisBlade;
use crate::blade::Blade;
use crate::error::{CliffordError, Result};

/// Maximum number of basis directions (one per digit `'1'..='9'`).
pub const MAX_DIMENSION: usize = 9;

/// The square of a basis vector under a signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Form {
    /// `e_i * e_i = +1`.
    Positive,
    /// `e_i * e_i = -1`.
    Negative,
    /// `e_i * e_i = 0`.
    Null,
}

impl Form {
    /// Returns the numeric value of the square: 1, -1 or 0.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Form::Positive => 1,
            Form::Negative => -1,
            Form::Null => 0,
        }
    }
}

/// An immutable metric signature (p, q, r).
///
/// Two signatures are equal iff their triples match exactly; every
/// operation combining two algebra elements checks this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Signature {
    p: u8,
    q: u8,
    r: u8,
}

impl Signature {
    /// Creates a signature with `p` positive, `q` negative and `r` null
    /// directions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetric` if any component is negative or the total
    /// dimension exceeds [`MAX_DIMENSION`].
    pub fn new(p: i64, q: i64, r: i64) -> Result<Self> {
        let invalid = || CliffordError::InvalidMetric { p, q, r };

        let pu = u8::try_from(p).map_err(|_| invalid())?;
        let qu = u8::try_from(q).map_err(|_| invalid())?;
        let ru = u8::try_from(r).map_err(|_| invalid())?;

        if usize::from(pu) + usize::from(qu) + usize::from(ru) > MAX_DIMENSION {
            return Err(invalid());
        }

        Ok(Self { p: pu, q: qu, r: ru })
    }

    /// The Euclidean signature (n, 0, 0).
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetric` if `n` exceeds [`MAX_DIMENSION`].
    pub fn euclidean(n: i64) -> Result<Self> {
        Self::new(n, 0, 0)
    }

    /// The anti-Euclidean signature (0, n, 0).
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetric` if `n` exceeds [`MAX_DIMENSION`].
    pub fn anti_euclidean(n: i64) -> Result<Self> {
        Self::new(0, n, 0)
    }

    /// The projective signature (n, 0, 1): n Euclidean directions plus one
    /// null direction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMetric` if `n + 1` exceeds [`MAX_DIMENSION`].
    pub fn projective(n: i64) -> Result<Self> {
        Self::new(n, 0, 1)
    }

    /// Number of directions squaring to +1.
    #[must_use]
    pub const fn p(&self) -> usize {
        self.p as usize
    }

    /// Number of directions squaring to -1.
    #[must_use]
    pub const fn q(&self) -> usize {
        self.q as usize
    }

    /// Number of null directions.
    #[must_use]
    pub const fn r(&self) -> usize {
        self.r as usize
    }

    /// Total number of basis directions, p + q + r.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.p() + self.q() + self.r()
    }

    /// Returns the square of basis vector `ordinal` (0-based), or `None` if
    /// the ordinal is outside the dimension.
    #[must_use]
    pub const fn form(&self, ordinal: usize) -> Option<Form> {
        if ordinal < self.p() {
            Some(Form::Positive)
        } else if ordinal < self.p() + self.q() {
            Some(Form::Negative)
        } else if ordinal < self.dimension() {
            Some(Form::Null)
        } else {
            None
        }
    }

    /// Returns the generators e1, ..., en of the algebra as unit blades.
    #[must_use]
    pub fn basis<S: Scalar>(&self) -> Vec<Blade<S>> {
        (0..self.dimension())
            .filter_map(|i| u8::try_from(i).ok())
            .map(|ordinal| Blade::from_parts(BasisBlade::vector(ordinal), S::one(), *self))
            .collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cl({},{},{})", self.p, self.q, self.r)
    }
}
