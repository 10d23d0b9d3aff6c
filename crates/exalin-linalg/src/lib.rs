//! # exalin-linalg
//!
//! Fixed-dimension linear algebra with exact semantics.
//!
//! This crate provides:
//! - [`Vector`]: N-component vectors with componentwise arithmetic and dot
//!   product
//! - [`Matrix`]: N×M matrices with minors, cofactor expansion, determinant,
//!   adjugate, and two inversion strategies
//! - [`AugmentedMatrix`]: an N×N coefficient matrix paired row-for-row with
//!   auxiliary values, reduced by Gaussian elimination to solve exact linear
//!   systems
//!
//! ## Exactness over robustness
//!
//! Pivot selection is driven purely by zero testing (see
//! [`exalin_scalar::ZeroTest`]), never by magnitude. Over exact scalar types
//! this yields exact results; over floating point it is not robust against
//! near-singular systems, which is an accepted trade-off, not a defect.
//!
//! ## Build-time configuration
//!
//! - `column-major`: switch the storage order behind the single
//!   coordinate-to-offset accessor
//! - `elimination-inverse`: make [`Matrix::inverse`] use the augmented
//!   elimination engine instead of the adjugate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod augmented;
pub mod error;
pub mod matrix;
pub mod vector;

pub use augmented::{AugmentedMatrix, Auxiliary};
pub use error::LinalgError;
pub use matrix::Matrix;
pub use vector::Vector;

/// Decimal precision used by the `Display` renderings of vectors, matrices
/// and augmented matrices.
pub const DISPLAY_PRECISION: usize = 2;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
