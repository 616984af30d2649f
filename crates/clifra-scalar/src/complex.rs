//! Gaussian integer scalars.
//!
//! `Complex<T>` is a scalar whenever its components are exact, e.g.
//! `Complex<i64>` or `Complex<i128>`.

use num_complex::Complex;
use num_traits::Num;

use crate::traits::Scalar;

impl<T> Scalar for Complex<T>
where
    T: Scalar + Num,
{
    fn zero() -> Self {
        Complex::new(<T as Scalar>::zero(), <T as Scalar>::zero())
    }

    fn one() -> Self {
        Complex::new(<T as Scalar>::one(), <T as Scalar>::zero())
    }

    fn is_zero(&self) -> bool {
        Scalar::is_zero(&self.re) && Scalar::is_zero(&self.im)
    }

    fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Complex::new(
            self.re.checked_add(&other.re)?,
            self.im.checked_add(&other.im)?,
        ))
    }

    fn checked_sub(&self, other: &Self) -> Option<Self> {
        Some(Complex::new(
            self.re.checked_sub(&other.re)?,
            self.im.checked_sub(&other.im)?,
        ))
    }

    fn checked_mul(&self, other: &Self) -> Option<Self> {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let ac = self.re.checked_mul(&other.re)?;
        let bd = self.im.checked_mul(&other.im)?;
        let ad = self.re.checked_mul(&other.im)?;
        let bc = self.im.checked_mul(&other.re)?;
        Some(Complex::new(ac.checked_sub(&bd)?, ad.checked_add(&bc)?))
    }

    fn checked_neg(&self) -> Option<Self> {
        Some(Complex::new(self.re.checked_neg()?, self.im.checked_neg()?))
    }
}

/// Creates the Gaussian integer `re + im*i`.
#[must_use]
pub fn gaussian(re: i64, im: i64) -> Complex<i64> {
    Complex::new(re, im)
}
