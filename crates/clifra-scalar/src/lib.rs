//! # clifra-scalar
//!
//! Exact scalar rings for the clifra geometric algebra engine.
//!
//! This crate provides:
//! - The `Scalar` trait: a ring element with an exact zero test
//! - Implementations for primitive signed integers
//! - Arbitrary precision integers and rationals backed by `dashu`
//! - Gaussian integers via `num-complex`
//!
//! Floating-point types are deliberately not implemented: blade
//! canonicalization relies on exact zero tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use complex::gaussian;
pub use dashu::integer::IBig;
pub use dashu::rational::RBig;
pub use num_complex::Complex;
pub use rationals::rational;
pub use traits::Scalar;
