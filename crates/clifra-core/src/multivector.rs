//! Multivectors: sums of canonical blades.
//!
//! Terms are stored as (basis blade, coefficient) pairs sorted by the
//! basis blade's index string. Every constructor funnels through
//! [`Multivector::from_terms`], which merges like blades and drops exact
//! zeros, so two equal multivectors always have identical term lists.

use std::collections::hash_map::Entry;
use std::fmt;

use clifra_scalar::Scalar;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::basis::BasisBlade;
use crate::blade::{canonicalize, Blade};
use crate::error::{ensure_same_signature, CliffordError, Result};
use crate::signature::Signature;
use crate::source::{Operand, Source};

/// A multivector over an exact scalar type.
///
/// # Invariants
///
/// - at most one term per basis blade
/// - no term has a zero coefficient
/// - terms are sorted by index string
/// - the empty term list is the zero multivector
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Multivector<S: Scalar> {
    terms: Vec<(BasisBlade, S)>,
    signature: Signature,
}

impl<S: Scalar> Multivector<S> {
    /// Builds a multivector from any accepted input shape.
    ///
    /// When `signature` is `None` it is taken from the source: the
    /// multivector or blade itself, or the first blade of a list. An empty
    /// blade list without a signature yields zero under
    /// `Signature::default()`, i.e. Cl(0,0,0).
    ///
    /// # Errors
    ///
    /// - `MissingMetric` for raw terms or a bare scalar without a signature
    /// - `MetricMismatch` if a given signature disagrees with the source, or
    ///   the blades of a list disagree with each other
    /// - `InvalidIndex` / `IndexOutOfRange` from raw index strings
    /// - `ScalarOverflow` if merging coefficients overflows a fixed-width
    ///   scalar
    ///
    /// # Example
    ///
    /// ```
    /// use clifra_core::{Multivector, Signature, Source};
    ///
    /// let sig = Signature::euclidean(2).unwrap();
    /// let terms = vec![("1".to_string(), 3i64), ("1".to_string(), 2), ("2".to_string(), 5)];
    /// let mv = Multivector::new(Source::Terms(terms), Some(sig)).unwrap();
    /// assert_eq!(mv.to_string(), "5*e1 + 5*e2");
    /// ```
    pub fn new(source: Source<S>, signature: Option<Signature>) -> Result<Self> {
        match source {
            Source::Multivector(mv) => {
                if let Some(sig) = signature {
                    ensure_same_signature(sig, mv.signature)?;
                }
                Ok(mv)
            }
            Source::Blades(blades) => {
                let resolved = signature
                    .or_else(|| blades.first().map(Blade::signature))
                    .unwrap_or_default();
                for blade in &blades {
                    ensure_same_signature(resolved, blade.signature())?;
                }
                Self::from_terms(resolved, blades.into_iter().map(Blade::into_term))
            }
            Source::Blade(blade) => {
                if let Some(sig) = signature {
                    ensure_same_signature(sig, blade.signature())?;
                }
                Ok(blade.into_multivector())
            }
            Source::Terms(raw) => {
                let sig = signature.ok_or(CliffordError::MissingMetric)?;
                let terms = raw
                    .into_iter()
                    .map(|(indices, scalar)| canonicalize(&indices, scalar, sig))
                    .collect::<Result<Vec<_>>>()?;
                Self::from_terms(sig, terms)
            }
            Source::Term(indices, scalar) => {
                let sig = signature.ok_or(CliffordError::MissingMetric)?;
                let term = canonicalize(&indices, scalar, sig)?;
                Self::from_terms(sig, [term])
            }
            Source::Scalar(value) => {
                let sig = signature.ok_or(CliffordError::MissingMetric)?;
                Self::from_terms(sig, [(BasisBlade::scalar(), value)])
            }
        }
    }

    /// The zero multivector.
    #[must_use]
    pub fn zero(signature: Signature) -> Self {
        Self {
            terms: Vec::new(),
            signature,
        }
    }

    /// Merges canonical terms into normal form.
    ///
    /// Coefficients of equal basis blades are summed, exact zeros dropped
    /// and the survivors sorted by index string.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if a merged coefficient does not fit the
    /// scalar type.
    pub(crate) fn from_terms<I>(signature: Signature, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BasisBlade, S)>,
    {
        let mut accumulated: FxHashMap<BasisBlade, S> = FxHashMap::default();
        let mut inputs = 0usize;

        for (indices, coeff) in terms {
            inputs += 1;
            match accumulated.entry(indices) {
                Entry::Vacant(slot) => {
                    slot.insert(coeff);
                }
                Entry::Occupied(mut slot) => {
                    let merged = slot
                        .get()
                        .checked_add(&coeff)
                        .ok_or(CliffordError::ScalarOverflow)?;
                    slot.insert(merged);
                }
            }
        }

        let mut terms: Vec<_> = accumulated
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        debug!(inputs, terms = terms.len(), %signature, "normalized multivector");

        Ok(Self { terms, signature })
    }

    /// Wraps terms that are already distinct, non-zero and sorted.
    pub(crate) fn from_canonical(signature: Signature, terms: Vec<(BasisBlade, S)>) -> Self {
        debug_assert!(terms.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(terms.iter().all(|(_, coeff)| !coeff.is_zero()));
        Self { terms, signature }
    }

    /// The signature shared by all terms.
    #[must_use]
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Number of stored (non-zero) terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero multivector.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(indices, coefficient)` pairs in canonical order.
    ///
    /// Each call starts a fresh pass over the terms.
    pub fn terms(&self) -> impl Iterator<Item = (&BasisBlade, &S)> + '_ {
        self.terms.iter().map(|(indices, coeff)| (indices, coeff))
    }

    /// Iterates over the terms as blades.
    pub fn blades(&self) -> impl Iterator<Item = Blade<S>> + '_ {
        self.terms
            .iter()
            .map(|(indices, coeff)| Blade::from_parts(indices.clone(), coeff.clone(), self.signature))
    }

    /// Returns the stored coefficient of a canonical basis blade.
    #[must_use]
    pub fn get(&self, indices: &BasisBlade) -> Option<&S> {
        self.terms
            .binary_search_by(|(key, _)| key.cmp(indices))
            .ok()
            .map(|i| &self.terms[i].1)
    }

    /// Returns the coefficient of the product named by a raw index string.
    ///
    /// The string is canonicalized first, so asking for `"21"` when `e12`
    /// has coefficient 3 yields -3.
    ///
    /// # Errors
    ///
    /// `InvalidIndex` or `IndexOutOfRange` for a malformed index string,
    /// `ScalarOverflow` if applying the sign overflows the scalar type.
    pub fn coefficient(&self, indices: &str) -> Result<S> {
        let (basis, sign) = canonicalize(indices, S::one(), self.signature)?;
        if sign.is_zero() {
            return Ok(S::zero());
        }
        match self.get(&basis) {
            Some(coeff) => coeff.checked_mul(&sign).ok_or(CliffordError::ScalarOverflow),
            None => Ok(S::zero()),
        }
    }

    /// The grade-0 coefficient.
    #[must_use]
    pub fn scalar_part(&self) -> S {
        self.get(&BasisBlade::scalar()).cloned().unwrap_or_else(S::zero)
    }

    /// Returns the grade-`k` part.
    #[must_use]
    pub fn grade(&self, k: usize) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(indices, _)| indices.grade() == k)
                .cloned()
                .collect(),
            signature: self.signature,
        }
    }

    /// Returns the grades present, ascending and without duplicates.
    #[must_use]
    pub fn grades(&self) -> Vec<usize> {
        let mut grades: Vec<usize> = self.terms.iter().map(|(indices, _)| indices.grade()).collect();
        grades.sort_unstable();
        grades.dedup();
        grades
    }

    /// Adds a blade, multivector or scalar.
    ///
    /// # Errors
    ///
    /// Returns `MetricMismatch` if `other` was built under a different
    /// signature, or `ScalarOverflow` if a merged coefficient does not fit
    /// the scalar type.
    pub fn add(&self, other: impl Into<Operand<S>>) -> Result<Self> {
        let other: Operand<S> = other.into();
        let extra = match other {
            Operand::Scalar(value) => vec![(BasisBlade::scalar(), value)],
            Operand::Blade(blade) => {
                ensure_same_signature(self.signature, blade.signature())?;
                vec![blade.into_term()]
            }
            Operand::Multivector(mv) => {
                ensure_same_signature(self.signature, mv.signature)?;
                mv.terms
            }
        };

        Self::from_terms(self.signature, self.terms.iter().cloned().chain(extra))
    }

    /// Subtracts a blade, multivector or scalar.
    ///
    /// # Errors
    ///
    /// Returns `MetricMismatch` if `other` was built under a different
    /// signature, or `ScalarOverflow` if negating or merging overflows the
    /// scalar type.
    pub fn sub(&self, other: impl Into<Operand<S>>) -> Result<Self> {
        let other: Operand<S> = other.into();
        self.add(other.neg()?)
    }

    /// Negates every coefficient.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if a negated coefficient does not fit the
    /// scalar type.
    pub fn neg(&self) -> Result<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(indices, coeff)| {
                let negated = coeff.checked_neg().ok_or(CliffordError::ScalarOverflow)?;
                Ok((indices.clone(), negated))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_canonical(self.signature, terms))
    }

    /// Multiplies every coefficient by `c`.
    ///
    /// # Errors
    ///
    /// Returns `ScalarOverflow` if a product does not fit the scalar type.
    pub fn scale(&self, c: &S) -> Result<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(indices, coeff)| {
                let scaled = coeff.checked_mul(c).ok_or(CliffordError::ScalarOverflow)?;
                Ok((indices.clone(), scaled))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_terms(self.signature, terms)
    }
}

impl<S: Scalar + fmt::Display> fmt::Display for Multivector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, blade) in self.blades().enumerate() {
            let term = blade.to_string();
            match (i, term.strip_prefix('-')) {
                (0, _) => write!(f, "{term}")?,
                (_, Some(magnitude)) => write!(f, " - {magnitude}")?,
                (_, None) => write!(f, " + {term}")?,
            }
        }
        Ok(())
    }
}
