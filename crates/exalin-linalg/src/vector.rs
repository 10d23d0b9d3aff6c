//! Fixed-size vectors.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use exalin_scalar::Scalar;

use crate::DISPLAY_PRECISION;

/// An N-component vector of scalars.
///
/// Vectors have value semantics: copies are independent, and all arithmetic
/// produces new vectors. Components are unrelated to each other; the only
/// invariant is that indexing is bounds-checked against `N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    values: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(values: [T; N]) -> Self {
        Self { values }
    }

    /// Creates a vector by evaluating `f` at every index.
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: std::array::from_fn(f),
        }
    }

    /// Returns a reference to the component at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns a mutable reference to the component at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the vector, returning its components.
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.values
    }

    /// The first component.
    ///
    /// # Panics
    ///
    /// Panics if `N` < 1.
    #[must_use]
    pub fn x(&self) -> &T {
        &self.values[0]
    }

    /// The second component.
    ///
    /// # Panics
    ///
    /// Panics if `N` < 2.
    #[must_use]
    pub fn y(&self) -> &T {
        &self.values[1]
    }

    /// The third component.
    ///
    /// # Panics
    ///
    /// Panics if `N` < 3.
    #[must_use]
    pub fn z(&self) -> &T {
        &self.values[2]
    }

    /// The fourth component.
    ///
    /// # Panics
    ///
    /// Panics if `N` < 4.
    #[must_use]
    pub fn w(&self) -> &T {
        &self.values[3]
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_fn(|_| T::zero())
    }

    /// Computes the dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.values
            .iter()
            .zip(other.values.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.values[i].clone() + rhs.values[i].clone())
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_fn(|i| self.values[i].clone() - rhs.values[i].clone())
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_fn(|i| -self.values[i].clone())
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_fn(|i| self.values[i].clone() * rhs.clone())
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::from_fn(|i| self.values[i].clone() / rhs.clone())
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs = lhs.clone() + rhs;
        }
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs = lhs.clone() - rhs;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for lhs in &mut self.values {
            *lhs = lhs.clone() * rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for lhs in &mut self.values {
            *lhs = lhs.clone() / rhs.clone();
        }
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.*}", DISPLAY_PRECISION, value)?;
        }
        write!(f, ")")
    }
}
