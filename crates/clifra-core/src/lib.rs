//! # clifra-core
//!
//! Blades and multivectors of a Clifford algebra Cl(p, q, r) over exact
//! scalars.
//!
//! This crate provides:
//! - Metric signatures with up to nine basis directions
//! - Blade canonicalization: sign-tracked sorting and metric reduction of
//!   repeated basis vectors
//! - Multivector normal form: like blades merged, zero terms pruned
//! - Tagged construction sources and batch construction
//!
//! ## Example
//!
//! ```
//! use clifra_core::{Blade, Signature};
//!
//! let sig = Signature::new(0, 3, 0).unwrap();
//! let b = Blade::new("11", 1i64, sig).unwrap();
//! assert!(b.is_scalar());
//! assert_eq!(*b.scalar(), -1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod batch;
pub mod blade;
pub mod error;
pub mod multivector;
pub mod signature;
pub mod source;

#[cfg(test)]
mod proptests;

pub use basis::BasisBlade;
pub use batch::{build_batch, BatchConfig, BuildRequest};
pub use blade::Blade;
pub use error::{CliffordError, Result};
pub use multivector::Multivector;
pub use signature::{Form, Signature, MAX_DIMENSION};
pub use source::{Operand, Source, Sum};
