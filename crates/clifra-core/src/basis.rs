//! Canonical basis blades.
//!
//! A basis blade is a strictly increasing sequence of basis-vector ordinals,
//! written as the digit string of the corresponding indices: `e1 e3` is
//! `"13"` and the scalar unit is `""`.

use std::fmt;

use smallvec::SmallVec;

use crate::signature::MAX_DIMENSION;

/// Converts an index digit `'1'..='9'` to its 0-based ordinal.
#[must_use]
pub fn ordinal_of(index: char) -> Option<u8> {
    match index {
        '1'..='9' => u8::try_from(u32::from(index) - u32::from('1')).ok(),
        _ => None,
    }
}

/// Converts a 0-based ordinal back to its index digit.
///
/// Ordinals are always below [`MAX_DIMENSION`].
#[must_use]
pub(crate) fn digit_of(ordinal: u8) -> char {
    debug_assert!(usize::from(ordinal) < MAX_DIMENSION);
    char::from(b'1' + ordinal)
}

/// The index part of a canonical blade.
///
/// Ordered lexicographically by index string, so `""` < `"1"` < `"12"` <
/// `"13"` < `"2"`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisBlade(SmallVec<[u8; MAX_DIMENSION]>);

impl BasisBlade {
    /// The grade-0 basis blade (the scalar unit).
    #[must_use]
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// The basis vector with the given 0-based ordinal.
    #[must_use]
    pub(crate) fn vector(ordinal: u8) -> Self {
        debug_assert!(usize::from(ordinal) < MAX_DIMENSION);
        let mut ordinals = SmallVec::new();
        ordinals.push(ordinal);
        Self(ordinals)
    }

    /// Wraps ordinals that are already strictly increasing.
    pub(crate) fn from_sorted(ordinals: &[u8]) -> Self {
        debug_assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
        Self(SmallVec::from_slice(ordinals))
    }

    /// Number of basis vectors in the blade.
    #[must_use]
    pub fn grade(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the scalar unit.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// The 0-based ordinals, strictly increasing.
    #[must_use]
    pub fn ordinals(&self) -> &[u8] {
        &self.0
    }

    /// The index digits in canonical order.
    pub fn digits(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&o| digit_of(o))
    }
}

impl fmt::Display for BasisBlade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.digits().try_for_each(|d| write!(f, "{d}"))
    }
}

impl fmt::Debug for BasisBlade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BasisBlade(\"{self}\")")
    }
}

impl PartialEq<str> for BasisBlade {
    fn eq(&self, other: &str) -> bool {
        self.digits().eq(other.chars())
    }
}

impl PartialEq<&str> for BasisBlade {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal_of('1'), Some(0));
        assert_eq!(ordinal_of('9'), Some(8));
        assert_eq!(ordinal_of('0'), None);
        assert_eq!(ordinal_of('a'), None);
        assert_eq!(digit_of(4), '5');
    }

    #[test]
    fn test_digits_cover_every_dimension() {
        for digit in '1'..='9' {
            let ordinal = ordinal_of(digit).unwrap();
            assert!(usize::from(ordinal) < MAX_DIMENSION);
            assert_eq!(digit_of(ordinal), digit);
            assert_eq!(BasisBlade::vector(ordinal).to_string(), digit.to_string());
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "MAX_DIMENSION")]
    fn test_digit_of_rejects_ordinal_past_nine() {
        let _ = digit_of(9);
    }

    #[test]
    fn test_lexicographic_order() {
        let scalar = BasisBlade::scalar();
        let e1 = BasisBlade::vector(0);
        let e12 = BasisBlade::from_sorted(&[0, 1]);
        let e13 = BasisBlade::from_sorted(&[0, 2]);
        let e2 = BasisBlade::vector(1);

        assert!(scalar < e1);
        assert!(e1 < e12);
        assert!(e12 < e13);
        assert!(e13 < e2);
    }

    #[test]
    fn test_display_and_compare() {
        let e13 = BasisBlade::from_sorted(&[0, 2]);
        assert_eq!(e13.to_string(), "13");
        assert_eq!(e13, "13");
        assert_eq!(format!("{e13:?}"), "BasisBlade(\"13\")");
        assert_eq!(e13.grade(), 2);
        assert!(BasisBlade::scalar().is_scalar());
        assert_eq!(BasisBlade::scalar(), "");
    }
}
