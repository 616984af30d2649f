//! # clifra
//!
//! Symbolic Clifford (geometric) algebra over exact scalars.
//!
//! clifra represents blades and multivectors of Cl(p, q, r) and keeps them
//! in a canonical form, so equality is structural:
//!
//! - **Blades** are sorted with sign tracking and collapsed through the
//!   metric (`e_i e_i` = +1, -1 or 0)
//! - **Multivectors** merge like blades and drop zero terms
//! - **Scalars** are any exact ring: machine integers, big integers,
//!   rationals, Gaussian integers
//!
//! ## Quick Start
//!
//! ```rust
//! use clifra::prelude::*;
//!
//! let sig = Signature::new(3, 0, 0).unwrap();
//! let b = Blade::new("21", 1i64, sig).unwrap();
//! assert_eq!(b.indices(), "12");
//! assert_eq!(*b.scalar(), -1);
//!
//! let mv = b.add(Operand::Scalar(2)).unwrap().into_multivector();
//! assert_eq!(mv.to_string(), "2 - e12");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use clifra_core as core;
pub use clifra_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use clifra_core::{
        build_batch, BasisBlade, BatchConfig, Blade, BuildRequest, CliffordError, Form, Multivector,
        Operand, Signature, Source, Sum,
    };
    pub use clifra_scalar::{gaussian, rational, Complex, IBig, RBig, Scalar};
}
