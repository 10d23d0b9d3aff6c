//! Per-type zero testing.
//!
//! Gaussian elimination never asks "how big is this entry", only "is this
//! entry zero". The answer depends on the scalar type: exact types answer
//! by comparison, floating point types answer within an epsilon.

/// Decides whether a value should be treated as zero.
///
/// Implementations for exact types must be exact; implementations for
/// inexact types choose their own tolerance. Degenerate rows and pivots are
/// detected exclusively through this predicate, so the choice of tolerance
/// fixes the behavior of every reduction in `exalin-linalg`.
pub trait ZeroTest {
    /// Returns true if the value is to be treated as zero.
    fn check_zero(&self) -> bool;
}

/// Tolerance for `f32` zero tests.
pub const F32_EPSILON: f32 = 1e-6;

/// Tolerance for `f64` zero tests.
pub const F64_EPSILON: f64 = 1e-12;

impl ZeroTest for f32 {
    fn check_zero(&self) -> bool {
        self.abs() < F32_EPSILON
    }
}

impl ZeroTest for f64 {
    fn check_zero(&self) -> bool {
        self.abs() < F64_EPSILON
    }
}

impl ZeroTest for i32 {
    fn check_zero(&self) -> bool {
        *self == 0
    }
}

impl ZeroTest for i64 {
    fn check_zero(&self) -> bool {
        *self == 0
    }
}
