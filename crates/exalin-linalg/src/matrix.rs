//! Fixed-dimension matrices.
//!
//! A [`Matrix`] is N columns × M rows of scalars in one flat allocation.
//! The storage order (row-major by default, column-major under the
//! `column-major` feature) is an implementation detail: every element access
//! goes through a single coordinate-to-offset accessor, and all public
//! surfaces speak `(x, y)` = (column, row) coordinates.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use exalin_scalar::Scalar;

use crate::augmented::AugmentedMatrix;
use crate::error::LinalgError;
use crate::vector::Vector;
use crate::DISPLAY_PRECISION;

/// An N×M matrix: N columns, M rows.
///
/// Elements are addressed as `(x, y)` with `x` the column in `[0, N)` and
/// `y` the row in `[0, M)`. Square-only operations (determinant, cofactors,
/// adjoint, inverse, identity, ...) are defined on `Matrix<T, N, N>` and are
/// unavailable on rectangular shapes by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T, const N: usize, const M: usize> {
    // Flat storage of N * M elements; the layout is fixed per build and
    // only `index_of` knows it.
    values: Vec<T>,
}

impl<T, const N: usize, const M: usize> Matrix<T, N, M> {
    #[inline]
    fn index_of(x: usize, y: usize) -> usize {
        debug_assert!(x < N && y < M);
        if cfg!(feature = "column-major") {
            x * M + y
        } else {
            x + y * N
        }
    }

    /// Returns a reference to the element at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < N && y < M {
            Some(&self.values[Self::index_of(x, y)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at column `x`, row `y`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < N && y < M {
            Some(&mut self.values[Self::index_of(x, y)])
        } else {
            None
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Creates a matrix from rows of elements.
    ///
    /// The argument is always interpreted row by row, regardless of the
    /// storage order selected at build time.
    #[must_use]
    pub fn new(rows: [[T; N]; M]) -> Self {
        let mut result = Self::zero();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, value) in row.into_iter().enumerate() {
                result[(x, y)] = value;
            }
        }
        result
    }

    /// Creates a matrix from row vectors.
    #[must_use]
    pub fn from_rows(rows: [Vector<T, N>; M]) -> Self {
        let mut result = Self::zero();
        for (y, row) in rows.into_iter().enumerate() {
            result.set_row(y, &row);
        }
        result
    }

    /// Creates a matrix by evaluating `f` at every `(column, row)` pair.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut result = Self::zero();
        for x in 0..N {
            for y in 0..M {
                result[(x, y)] = f(x, y);
            }
        }
        result
    }

    /// The zero matrix.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            values: vec![T::zero(); N * M],
        }
    }

    /// Returns row `y` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `y` >= `M`.
    #[must_use]
    pub fn row(&self, y: usize) -> Vector<T, N> {
        Vector::from_fn(|x| self[(x, y)].clone())
    }

    /// Returns column `x` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `x` >= `N`.
    #[must_use]
    pub fn column(&self, x: usize) -> Vector<T, M> {
        Vector::from_fn(|y| self[(x, y)].clone())
    }

    /// Replaces row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` >= `M`.
    pub fn set_row(&mut self, y: usize, value: &Vector<T, N>) {
        for x in 0..N {
            self[(x, y)] = value[x].clone();
        }
    }

    /// Replaces column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` >= `N`.
    pub fn set_column(&mut self, x: usize, value: &Vector<T, M>) {
        for y in 0..M {
            self[(x, y)] = value[y].clone();
        }
    }

    /// Returns all rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> [Vector<T, N>; M] {
        std::array::from_fn(|y| self.row(y))
    }

    /// Returns all columns, left to right.
    #[must_use]
    pub fn columns(&self) -> [Vector<T, M>; N] {
        std::array::from_fn(|x| self.column(x))
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, M, N> {
        Matrix::from_fn(|x, y| self[(y, x)].clone())
    }

    /// Returns the submatrix formed by deleting column `x` and row `y`.
    ///
    /// The target dimensions are supplied by the caller and checked at
    /// runtime: `P` must equal `N - 1` and `Q` must equal `M - 1`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `x` >= `N` or `y` >= `M`, and a
    /// dimension mismatch if the target shape is not `(N - 1)`×`(M - 1)`.
    pub fn minor<const P: usize, const Q: usize>(
        &self,
        x: usize,
        y: usize,
    ) -> Result<Matrix<T, P, Q>, LinalgError> {
        if x >= N {
            return Err(LinalgError::ColumnOutOfRange { index: x, bound: N });
        }
        if y >= M {
            return Err(LinalgError::RowOutOfRange { index: y, bound: M });
        }
        if P != N - 1 || Q != M - 1 {
            return Err(LinalgError::DimensionMismatch {
                expected_cols: N - 1,
                expected_rows: M - 1,
                actual_cols: P,
                actual_rows: Q,
            });
        }
        Ok(Matrix::from_fn(|ix, iy| {
            let sx = if ix >= x { ix + 1 } else { ix };
            let sy = if iy >= y { iy + 1 } else { iy };
            self[(sx, sy)].clone()
        }))
    }

    // Canonical row-major snapshot, independent of the storage feature.
    fn to_flat(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(N * M);
        for y in 0..M {
            for x in 0..N {
                flat.push(self[(x, y)].clone());
            }
        }
        flat
    }
}

/// Square-matrix operations.
impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_fn(|x, y| if x == y { T::one() } else { T::zero() })
    }

    /// Computes the determinant by cofactor expansion along row 0.
    ///
    /// The expansion is exact for exact scalar types; its zero test defines
    /// singularity. Complexity is O(N!), which is acceptable for the small
    /// fixed dimensions this crate targets.
    // TODO: track pivot and swap multipliers in the augmented engine so the
    // echelon form can produce the determinant in O(N^3).
    #[must_use]
    pub fn determinant(&self) -> T {
        det_flat(&self.to_flat(), N)
    }

    /// Builds the cofactor matrix: entry `(x, y)` is the signed determinant
    /// of the minor at `(x, y)`.
    #[must_use]
    pub fn cofactors(&self) -> Self {
        let flat = self.to_flat();
        let mut result = Self::zero();
        let mut sign = T::one();
        for x in 0..N {
            for y in 0..N {
                let c = det_flat(&minor_flat(&flat, N, x, y), N - 1);
                result[(x, y)] = sign.clone() * c;
                sign = -sign;
            }
            // The alternation (-1)^(x+y) walks columns of odd length back to
            // the sign it started on; even N needs one extra flip per column.
            if N % 2 == 0 {
                sign = -sign;
            }
        }
        result
    }

    /// Returns the adjugate: the transpose of the cofactor matrix.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        self.cofactors().transpose()
    }

    /// Returns true if the determinant zero-tests as zero.
    #[must_use]
    pub fn singular(&self) -> bool {
        self.determinant().check_zero()
    }

    /// Computes the inverse.
    ///
    /// The strategy is fixed at build time: the adjugate strategy by
    /// default, the elimination strategy under the `elimination-inverse`
    /// feature. Both agree on results and on when they fail.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if no inverse exists.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        if cfg!(feature = "elimination-inverse") {
            self.inverse_via_elimination()
        } else {
            self.inverse_via_adjugate()
        }
    }

    /// Computes the inverse as `adjoint() / determinant()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if the determinant zero-tests as
    /// zero.
    pub fn inverse_via_adjugate(&self) -> Result<Self, LinalgError> {
        let determinant = self.determinant();
        if determinant.check_zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.adjoint() / determinant)
    }

    /// Computes the inverse by solving `[self | identity rows]` with the
    /// augmented elimination engine.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if the augmented system is
    /// singular.
    pub fn inverse_via_elimination(&self) -> Result<Self, LinalgError> {
        let augmented = AugmentedMatrix::new(self.clone(), Self::identity().rows());
        let solved = augmented.solve()?;
        Ok(Self::from_rows(solved))
    }

    /// Divides the matrix by its determinant.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if the determinant zero-tests as
    /// zero.
    pub fn unit(&self) -> Result<Self, LinalgError> {
        let determinant = self.determinant();
        if determinant.check_zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.clone() / determinant)
    }

    /// Divides by another square matrix: `self * rhs.inverse()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if `rhs` has no inverse.
    pub fn divide(&self, rhs: &Self) -> Result<Self, LinalgError> {
        let inverse = rhs.inverse()?;
        Ok(self * &inverse)
    }
}

/// Determinant of a row-major `n`×`n` buffer by Laplace expansion along the
/// first row; the base case is a 1×1 buffer.
fn det_flat<T: Scalar>(data: &[T], n: usize) -> T {
    if n == 0 {
        return T::one();
    }
    if n == 1 {
        return data[0].clone();
    }
    let mut result = T::zero();
    let mut sign = T::one();
    for x in 0..n {
        let c = det_flat(&minor_flat(data, n, x, 0), n - 1);
        result = result + sign.clone() * data[x].clone() * c;
        sign = -sign;
    }
    result
}

/// Row-major minor of a row-major `n`×`n` buffer: drops column `x`, row `y`.
fn minor_flat<T: Clone>(data: &[T], n: usize, x: usize, y: usize) -> Vec<T> {
    let mut sub = Vec::with_capacity(n.saturating_sub(1).pow(2));
    for iy in 0..n {
        if iy == y {
            continue;
        }
        for ix in 0..n {
            if ix == x {
                continue;
            }
            sub.push(data[ix + iy * n].clone());
        }
    }
    sub
}

impl<T, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    /// Indexes by `(column, row)`.
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(x < N && y < M, "matrix index ({x}, {y}) out of bounds");
        &self.values[Self::index_of(x, y)]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(x < N && y < M, "matrix index ({x}, {y}) out of bounds");
        &mut self.values[Self::index_of(x, y)]
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign<&Matrix<T, N, M>> for Matrix<T, N, M> {
    fn add_assign(&mut self, rhs: &Matrix<T, N, M>) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs = lhs.clone() + rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> SubAssign<&Matrix<T, N, M>> for Matrix<T, N, M> {
    fn sub_assign(&mut self, rhs: &Matrix<T, N, M>) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs = lhs.clone() - rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for Matrix<T, N, M> {
    fn mul_assign(&mut self, rhs: T) {
        for lhs in &mut self.values {
            *lhs = lhs.clone() * rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> DivAssign<T> for Matrix<T, N, M> {
    fn div_assign(&mut self, rhs: T) {
        for lhs in &mut self.values {
            *lhs = lhs.clone() / rhs.clone();
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for Matrix<T, N, M> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Div<T> for Matrix<T, N, M> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize, const O: usize> Mul<&Matrix<T, O, N>>
    for &Matrix<T, N, M>
{
    type Output = Matrix<T, O, M>;

    fn mul(self, rhs: &Matrix<T, O, N>) -> Self::Output {
        Matrix::from_fn(|x, y| self.row(y).dot(&rhs.column(x)))
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<&Vector<T, N>> for &Matrix<T, N, M> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: &Vector<T, N>) -> Self::Output {
        Vector::from_fn(|y| self.row(y).dot(rhs))
    }
}

impl<T: Scalar + fmt::Display, const N: usize, const M: usize> fmt::Display for Matrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..M {
            write!(f, "|\t")?;
            for x in 0..N {
                write!(f, "{:.*}\t", DISPLAY_PRECISION, self[(x, y)])?;
            }
            write!(f, "|")?;
            if y < M - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
