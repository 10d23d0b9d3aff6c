//! # exalin-scalar
//!
//! Scalar foundations for the exalin linear algebra crates.
//!
//! This crate provides:
//! - The [`Scalar`] trait: the capability set every matrix/vector element
//!   must carry (field-style arithmetic plus a zero test)
//! - The [`ZeroTest`] trait: a per-type predicate deciding whether a value
//!   is to be treated as zero during elimination
//! - [`Rational`]: exact arbitrary precision rational numbers, backed by
//!   `dashu`
//!
//! ## Zero testing
//!
//! Elimination-style algorithms pivot on whether an entry *is* zero, not on
//! how large it is. Exact types (integers, rationals) compare against zero
//! directly; floating point types use a small epsilon to absorb round-off.
//! Implementing [`ZeroTest`] for a scalar type is the override point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;
pub mod traits;
pub mod zero;

#[cfg(test)]
mod proptests;

pub use rational::Rational;
pub use traits::Scalar;
pub use zero::ZeroTest;
