//! The scalar capability set.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::zero::ZeroTest;

/// The element type of vectors and matrices.
///
/// A `Scalar` carries by-value field-style arithmetic, the additive and
/// multiplicative identities, and a zero test. The zero test is the only
/// numeric judgement the elimination engine ever makes; no magnitude-based
/// pivot selection is performed, so exact types (integers, [`Rational`])
/// produce exact results.
///
/// Division is taken at face value: on integers it truncates, exactly as
/// integer division does everywhere else. Exactness of reductions is only
/// guaranteed for scalar types that form a field.
///
/// [`Rational`]: crate::Rational
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + ZeroTest
{
}

impl<T> Scalar for T where
    T: Clone
        + Debug
        + PartialEq
        + Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Neg<Output = Self>
        + Zero
        + One
        + ZeroTest
{
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use crate::Rational;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn expected_types_are_scalars() {
        assert_scalar::<f32>();
        assert_scalar::<f64>();
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<Rational>();
    }
}
