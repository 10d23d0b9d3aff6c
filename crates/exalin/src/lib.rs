//! # exalin
//!
//! Exact fixed-dimension linear algebra.
//!
//! Exalin provides vectors and matrices with compile-time dimensions and an
//! augmented-matrix Gaussian elimination engine that solves linear systems
//! exactly over exact scalar types.
//!
//! ## Quick Start
//!
//! ```rust
//! use exalin::prelude::*;
//!
//! // 2x + y = 5, x + 3y = 10
//! let system = AugmentedMatrix::new(
//!     Matrix::new([[2.0, 1.0], [1.0, 3.0]]),
//!     [5.0, 10.0],
//! );
//! let [x, y]: [f64; 2] = system.solve().unwrap();
//! assert!((x - 1.0).abs() < 1e-9);
//! assert!((y - 3.0).abs() < 1e-9);
//! ```
//!
//! For exact results use [`Rational`] scalars; every reduction then returns
//! the mathematically exact answer.
//!
//! ## Crates
//!
//! - [`exalin_scalar`]: the [`Scalar`] capability set, zero testing, exact
//!   rationals
//! - [`exalin_linalg`]: vectors, matrices, and the elimination engine
//!
//! [`Rational`]: exalin_scalar::Rational
//! [`Scalar`]: exalin_scalar::Scalar

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exalin_linalg as linalg;
pub use exalin_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exalin_linalg::{AugmentedMatrix, Auxiliary, LinalgError, Matrix, Vector};
    pub use exalin_scalar::{Rational, Scalar, ZeroTest};
}
