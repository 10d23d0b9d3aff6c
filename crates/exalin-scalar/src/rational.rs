//! Exact arbitrary precision rational numbers.
//!
//! This module wraps `dashu` to provide the exact field arithmetic the
//! elimination engine is designed around.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::zero::ZeroTest;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let mut num = IBig::from(numerator);
        if denominator < 0 {
            num = -num;
        }
        Self(RBig::from_parts(num, IBig::from(denominator).unsigned_abs()))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(n))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator() == IBig::ONE
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl ZeroTest for Rational {
    fn check_zero(&self) -> bool {
        self.is_zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}
