//! Errors raised while building blades and multivectors.

use thiserror::Error;

use crate::signature::Signature;

/// Errors that can occur during construction or combination of algebra
/// elements.
///
/// Every error is fatal to the single operation that raised it; no partial
/// results are produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliffordError {
    /// A signature component is negative, or the dimension exceeds nine.
    #[error("invalid metric signature ({p}, {q}, {r}): components must be non-negative with p + q + r <= 9")]
    InvalidMetric {
        /// Requested count of positive-square directions.
        p: i64,
        /// Requested count of negative-square directions.
        q: i64,
        /// Requested count of null directions.
        r: i64,
    },

    /// A raw index string contains a character outside `'1'..='9'`.
    #[error("invalid basis index {index:?}: expected a digit 1-9")]
    InvalidIndex {
        /// The offending character.
        index: char,
    },

    /// An index refers to a direction beyond the signature's dimension.
    #[error("basis index {index:?} out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// The offending index digit.
        index: char,
        /// Dimension of the signature it was checked against.
        dimension: usize,
    },

    /// Two operands were built under different signatures.
    #[error("metric signature mismatch: {left} vs {right}")]
    MetricMismatch {
        /// Signature of the left operand.
        left: Signature,
        /// Signature of the right operand.
        right: Signature,
    },

    /// A raw index string or bare scalar was supplied without a signature.
    #[error("a metric signature is required to build from raw indices or a scalar")]
    MissingMetric,

    /// A coefficient left the range of its fixed-width scalar type.
    #[error("scalar arithmetic overflowed the coefficient type")]
    ScalarOverflow,
}

/// Result alias used throughout clifra.
pub type Result<T> = std::result::Result<T, CliffordError>;

/// Fails with `MetricMismatch` unless both signatures are identical.
pub(crate) fn ensure_same_signature(left: Signature, right: Signature) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(CliffordError::MetricMismatch { left, right })
    }
}
