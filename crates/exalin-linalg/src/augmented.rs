//! The augmented-matrix Gaussian elimination engine.
//!
//! An [`AugmentedMatrix`] pairs an N×N coefficient matrix with one auxiliary
//! value per row. Every row operation moves the coefficient row and its
//! auxiliary entry together, so reducing the coefficient matrix to reduced
//! row echelon form turns the auxiliary column into the solution of the
//! original system. The auxiliary type is generic: a scalar solves a single
//! right-hand side, a [`Vector`] solves several simultaneously (which is how
//! matrix inversion reuses this engine with the rows of the identity).
//!
//! Pivot handling is driven by zero testing alone. Over exact scalar types
//! this is exact; there is deliberately no magnitude-based pivoting, so
//! floating point inputs near singularity are out of scope.

use std::fmt;

use exalin_scalar::Scalar;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::DISPLAY_PRECISION;

/// What travels with each row of an augmented system.
///
/// The engine only ever adds auxiliary values together and scales them by a
/// coefficient scalar, so that capability set is all this trait demands.
pub trait Auxiliary<T>: Clone {
    /// Componentwise (or plain) addition.
    #[must_use]
    fn add(&self, other: &Self) -> Self;

    /// Scaling by a coefficient scalar.
    #[must_use]
    fn scale(&self, factor: &T) -> Self;
}

impl<T: Scalar> Auxiliary<T> for T {
    fn add(&self, other: &Self) -> Self {
        self.clone() + other.clone()
    }

    fn scale(&self, factor: &T) -> Self {
        self.clone() * factor.clone()
    }
}

impl<T: Scalar, const N: usize> Auxiliary<T> for Vector<T, N> {
    fn add(&self, other: &Self) -> Self {
        self.clone() + other.clone()
    }

    fn scale(&self, factor: &T) -> Self {
        self.clone() * factor.clone()
    }
}

/// An N×N coefficient matrix paired row-for-row with auxiliary values.
///
/// Constructed from snapshots: the coefficient matrix and auxiliary array
/// are copied in, and every public reduction ([`ordered`], [`row_echelon`],
/// [`reduced_row_echelon`], [`solve`]) returns a new instance. The row
/// primitives ([`swap_rows`], [`scale_row`], [`add_row`]) mutate `self` and
/// exist for the reduction drivers; they are public because the documented
/// non-eliminable failure is only reachable through them.
///
/// [`ordered`]: AugmentedMatrix::ordered
/// [`row_echelon`]: AugmentedMatrix::row_echelon
/// [`reduced_row_echelon`]: AugmentedMatrix::reduced_row_echelon
/// [`solve`]: AugmentedMatrix::solve
/// [`swap_rows`]: AugmentedMatrix::swap_rows
/// [`scale_row`]: AugmentedMatrix::scale_row
/// [`add_row`]: AugmentedMatrix::add_row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentedMatrix<T, const N: usize, A> {
    matrix: Matrix<T, N, N>,
    aux: [A; N],
}

impl<T: Scalar, const N: usize, A: Auxiliary<T>> AugmentedMatrix<T, N, A> {
    /// Creates an augmented matrix from a coefficient matrix and one
    /// auxiliary value per row.
    #[must_use]
    pub fn new(matrix: Matrix<T, N, N>, aux: [A; N]) -> Self {
        Self { matrix, aux }
    }

    /// The coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &Matrix<T, N, N> {
        &self.matrix
    }

    /// The auxiliary values, top row first.
    #[must_use]
    pub fn auxiliary(&self) -> &[A; N] {
        &self.aux
    }

    /// Returns the first column holding a non-zero-tested value in `row`,
    /// or `N` if the row is entirely zero.
    ///
    /// # Panics
    ///
    /// Panics if `row` >= `N`.
    #[must_use]
    pub fn leading_index(&self, row: usize) -> usize {
        for x in 0..N {
            if !self.matrix[(x, row)].check_zero() {
                return x;
            }
        }
        N
    }

    /// Returns the coefficient at the leading index of `row`, or zero if
    /// the row has no leading index.
    ///
    /// # Panics
    ///
    /// Panics if `row` >= `N`.
    #[must_use]
    pub fn leading_value(&self, row: usize) -> T {
        let index = self.leading_index(row);
        if index == N {
            return T::zero();
        }
        self.matrix[(index, row)].clone()
    }

    fn column_zero(&self, x: usize) -> bool {
        (0..N).all(|y| self.matrix[(x, y)].check_zero())
    }

    fn row_zero(&self, y: usize) -> bool {
        (0..N).all(|x| self.matrix[(x, y)].check_zero())
    }

    /// Returns true if every coefficient in column `x` zero-tests as zero.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `x` >= `N`.
    pub fn column_is_zero(&self, x: usize) -> Result<bool, LinalgError> {
        if x >= N {
            return Err(LinalgError::ColumnOutOfRange { index: x, bound: N });
        }
        Ok(self.column_zero(x))
    }

    /// Returns true if every coefficient in row `y` zero-tests as zero.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `y` >= `N`.
    pub fn row_is_zero(&self, y: usize) -> Result<bool, LinalgError> {
        if y >= N {
            return Err(LinalgError::RowOutOfRange { index: y, bound: N });
        }
        Ok(self.row_zero(y))
    }

    /// Returns true if any coefficient row is entirely zero.
    #[must_use]
    pub fn has_zero_row(&self) -> bool {
        (0..N).any(|y| self.row_zero(y))
    }

    /// Returns true if the system is singular: its row echelon form has a
    /// zero row. Consistent with the determinant-based definition on
    /// [`Matrix`], but computed by the elimination engine itself.
    ///
    /// # Errors
    ///
    /// Propagates a non-eliminable failure from the reduction; this cannot
    /// occur for a well-formed augmented matrix.
    pub fn singular(&self) -> Result<bool, LinalgError> {
        Ok(self.row_echelon()?.has_zero_row())
    }

    /// Exchanges rows `a` and `b`, coefficients and auxiliaries alike.
    ///
    /// # Panics
    ///
    /// Panics if `a` >= `N` or `b` >= `N`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        let row_a = self.matrix.row(a);
        let row_b = self.matrix.row(b);
        self.matrix.set_row(a, &row_b);
        self.matrix.set_row(b, &row_a);
        self.aux.swap(a, b);
    }

    /// Multiplies row `index`, coefficients and auxiliary alike, by
    /// `scalar`.
    ///
    /// # Panics
    ///
    /// Panics if `index` >= `N`.
    pub fn scale_row(&mut self, index: usize, scalar: &T) {
        let scaled = self.matrix.row(index) * scalar.clone();
        self.matrix.set_row(index, &scaled);
        self.aux[index] = self.aux[index].scale(scalar);
    }

    /// Adds `scalar` times row `source` to row `target`, coefficients and
    /// auxiliaries alike.
    ///
    /// # Panics
    ///
    /// Panics if `target` >= `N` or `source` >= `N`.
    pub fn add_row(&mut self, target: usize, source: usize, scalar: &T) {
        let addend = self.matrix.row(source) * scalar.clone();
        let sum = self.matrix.row(target) + addend;
        self.matrix.set_row(target, &sum);
        self.aux[target] = self.aux[target].add(&self.aux[source].scale(scalar));
    }

    fn set_row(&mut self, index: usize, row: &Vector<T, N>, aux: A) {
        self.matrix.set_row(index, row);
        self.aux[index] = aux;
    }

    /// Zeroes the entry at column `x`, row `y` by adding a multiple of a
    /// donor row: any other row whose leading index is at least `x` and
    /// whose entry at column `x` is non-zero. A no-op if the entry already
    /// zero-tests as zero.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonEliminable`] if no donor row exists, which
    /// indicates the column cannot be reduced with the current row set.
    ///
    /// # Panics
    ///
    /// Panics if `x` >= `N` or `y` >= `N`.
    pub fn eliminate_from_right(&mut self, x: usize, y: usize) -> Result<(), LinalgError> {
        let target = -self.matrix[(x, y)].clone();
        if target.check_zero() {
            return Ok(());
        }
        for iy in 0..N {
            if iy == y {
                continue;
            }
            let value = self.matrix[(x, iy)].clone();
            if !value.check_zero() && self.leading_index(iy) >= x {
                self.add_row(y, iy, &(target / value));
                return Ok(());
            }
        }
        Err(LinalgError::NonEliminable { column: x, row: y })
    }

    /// Like [`eliminate_from_right`], but only rows strictly below `y` may
    /// donate. Rows above are already fully reduced during back-substitution
    /// and must not be disturbed.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonEliminable`] if no donor row exists below.
    ///
    /// # Panics
    ///
    /// Panics if `x` >= `N` or `y` >= `N`.
    ///
    /// [`eliminate_from_right`]: AugmentedMatrix::eliminate_from_right
    pub fn eliminate_from_below(&mut self, x: usize, y: usize) -> Result<(), LinalgError> {
        let target = -self.matrix[(x, y)].clone();
        if target.check_zero() {
            return Ok(());
        }
        for iy in y + 1..N {
            if self.leading_index(iy) < x {
                continue;
            }
            let value = self.matrix[(x, iy)].clone();
            if !value.check_zero() {
                self.add_row(y, iy, &(target / value));
                return Ok(());
            }
        }
        Err(LinalgError::NonEliminable { column: x, row: y })
    }

    /// Returns a copy whose rows are permuted by ascending leading index.
    ///
    /// The sort is stable: rows with equal leading index, including multiple
    /// zero rows, keep their original relative order. An already ordered
    /// system comes back in the identical row sequence.
    #[must_use]
    pub fn ordered(&self) -> Self {
        let mut indices: Vec<usize> = (0..N).collect();
        indices.sort_by_key(|&row| self.leading_index(row));

        let mut result = self.clone();
        for (i, &source) in indices.iter().enumerate() {
            result.set_row(i, &self.matrix.row(source), self.aux[source].clone());
        }
        result
    }

    /// Reduces to row echelon form: leading indices non-decreasing, zero
    /// rows last, and every entry below a pivot eliminated.
    ///
    /// Each elimination re-sorts the rows and restarts the scan below the
    /// pivot, because eliminating an entry can change which row carries the
    /// pivot for the current column.
    ///
    /// # Errors
    ///
    /// Propagates a non-eliminable failure; the zero-test guards keep this
    /// unreachable for well-formed inputs.
    pub fn row_echelon(&self) -> Result<Self, LinalgError> {
        let mut result = self.ordered();

        for x in 0..N.saturating_sub(1) {
            if result.column_zero(x) {
                continue;
            }

            let mut y = x + 1;
            while y < N {
                // Rows are ordered, so the first zero row ends the column.
                if result.row_zero(y) {
                    break;
                }
                if result.matrix[(x, y)].check_zero() {
                    y += 1;
                    continue;
                }

                result.eliminate_from_right(x, y)?;
                result = result.ordered();
                y = x + 1;
            }
        }

        Ok(result.ordered())
    }

    /// Reduces to reduced row echelon form: every leading entry scaled to
    /// one and alone in its column. For a non-singular system this form is
    /// unique.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if the row echelon form contains a
    /// zero row.
    pub fn reduced_row_echelon(&self) -> Result<Self, LinalgError> {
        let mut result = self.row_echelon()?;

        if result.has_zero_row() {
            return Err(LinalgError::Singular);
        }

        for y in 0..N {
            let leading_value = result.leading_value(y);
            result.scale_row(y, &(T::one() / leading_value));

            for x in result.leading_index(y) + 1..N {
                result.eliminate_from_below(x, y)?;
            }
        }

        Ok(result)
    }

    /// Solves the system, returning the auxiliary column(s) of the reduced
    /// row echelon form: the unique solution of the original system(s).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Singular`] if the system is singular.
    pub fn solve(&self) -> Result<[A; N], LinalgError> {
        Ok(self.reduced_row_echelon()?.aux)
    }
}

impl<T, const N: usize, A> fmt::Display for AugmentedMatrix<T, N, A>
where
    T: Scalar + fmt::Display,
    A: Auxiliary<T> + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            write!(f, "|\t")?;
            for x in 0..N {
                write!(f, "{:.*}\t", DISPLAY_PRECISION, self.matrix[(x, y)])?;
            }
            write!(f, "|\t{:.*}\t|", DISPLAY_PRECISION, self.aux[y])?;
            if y < N - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exalin_scalar::{Rational, ZeroTest};

    fn q(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn qr(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn leading_index_and_value() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(0), q(2), q(1)], [q(0), q(0), q(0)], [q(3), q(0), q(0)]]),
            [q(1), q(2), q(3)],
        );
        assert_eq!(aug.leading_index(0), 1);
        assert_eq!(aug.leading_value(0), q(2));
        assert_eq!(aug.leading_index(1), 3);
        assert_eq!(aug.leading_value(1), q(0));
        assert_eq!(aug.leading_index(2), 0);
    }

    #[test]
    fn zero_queries() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(0), q(1)], [q(0), q(0)]]),
            [q(1), q(2)],
        );
        assert_eq!(aug.column_is_zero(0), Ok(true));
        assert_eq!(aug.column_is_zero(1), Ok(false));
        assert_eq!(aug.row_is_zero(1), Ok(true));
        assert!(aug.has_zero_row());

        assert_eq!(
            aug.column_is_zero(2),
            Err(LinalgError::ColumnOutOfRange { index: 2, bound: 2 })
        );
        assert_eq!(
            aug.row_is_zero(9),
            Err(LinalgError::RowOutOfRange { index: 9, bound: 2 })
        );
    }

    #[test]
    fn row_primitives_keep_aux_in_step() {
        let mut aug = AugmentedMatrix::new(
            Matrix::new([[q(1), q(2)], [q(3), q(4)]]),
            [q(10), q(20)],
        );

        aug.swap_rows(0, 1);
        assert_eq!(aug.coefficients().row(0), Vector::new([q(3), q(4)]));
        assert_eq!(aug.auxiliary()[0], q(20));

        aug.scale_row(0, &q(2));
        assert_eq!(aug.coefficients().row(0), Vector::new([q(6), q(8)]));
        assert_eq!(aug.auxiliary()[0], q(40));

        aug.add_row(1, 0, &q(-1));
        assert_eq!(aug.coefficients().row(1), Vector::new([q(-5), q(-6)]));
        assert_eq!(aug.auxiliary()[1], q(-30));
    }

    #[test]
    fn ordered_sorts_by_leading_index() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(0), q(0), q(1)], [q(0), q(2), q(0)], [q(3), q(0), q(0)]]),
            [q(1), q(2), q(3)],
        );
        let ordered = aug.ordered();
        assert_eq!(ordered.leading_index(0), 0);
        assert_eq!(ordered.leading_index(1), 1);
        assert_eq!(ordered.leading_index(2), 2);
        assert_eq!(*ordered.auxiliary(), [q(3), q(2), q(1)]);
    }

    #[test]
    fn ordered_is_stable_on_ties() {
        // Rows 0 and 2 tie on leading index 1 and must keep their order;
        // row 1 leads at 0 and moves to the top.
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(0), q(5), q(0)], [q(7), q(0), q(0)], [q(0), q(6), q(0)]]),
            [q(1), q(2), q(3)],
        );
        let ordered = aug.ordered();
        assert_eq!(*ordered.auxiliary(), [q(2), q(1), q(3)]);
        assert_eq!(ordered.coefficients().row(1), Vector::new([q(0), q(5), q(0)]));
        assert_eq!(ordered.coefficients().row(2), Vector::new([q(0), q(6), q(0)]));
    }

    #[test]
    fn ordered_on_ordered_system_is_identity() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(1), q(2)], [q(0), q(3)]]),
            [q(4), q(5)],
        );
        assert_eq!(aug.ordered(), aug);
    }

    #[test]
    fn row_echelon_triangularizes() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(2), q(1)], [q(4), q(3)]]),
            [q(5), q(11)],
        );
        let echelon = aug.row_echelon().unwrap();
        assert!(echelon.leading_index(0) <= echelon.leading_index(1));
        assert!(echelon.coefficients()[(0, 1)].check_zero());
        assert!(!echelon.has_zero_row());
    }

    #[test]
    fn singular_detects_dependent_rows() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(1), q(2)], [q(2), q(4)]]),
            [q(1), q(2)],
        );
        assert_eq!(aug.singular(), Ok(true));
        assert_eq!(aug.reduced_row_echelon(), Err(LinalgError::Singular));
        assert_eq!(aug.solve(), Err(LinalgError::Singular));
    }

    #[test]
    fn solve_concrete_system() {
        // 2x + y = 5, x + 3y = 10 has the unique solution x = 1, y = 3.
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(2), q(1)], [q(1), q(3)]]),
            [q(5), q(10)],
        );
        assert_eq!(aug.solve().unwrap(), [q(1), q(3)]);
    }

    #[test]
    fn solve_checks_back_against_the_system() {
        let matrix = Matrix::new([
            [q(3), q(2), q(-1)],
            [q(2), q(-2), q(4)],
            [q(-1), qr(1, 2), q(-1)],
        ]);
        let aug = AugmentedMatrix::new(matrix.clone(), [q(1), q(-2), q(0)]);
        let solution = aug.solve().unwrap();
        assert_eq!(solution, [q(1), q(-2), q(-2)]);

        let x = Vector::new(solution);
        assert_eq!(&matrix * &x, Vector::new([q(1), q(-2), q(0)]));
    }

    #[test]
    fn solve_with_vector_auxiliary_solves_simultaneously() {
        // Solving against the identity rows inverts the coefficients.
        let matrix = Matrix::new([[q(2), q(0)], [q(0), q(4)]]);
        let aug = AugmentedMatrix::new(matrix, Matrix::identity().rows());
        let solved = aug.solve().unwrap();
        let inverse = Matrix::from_rows(solved);
        assert_eq!(
            inverse,
            Matrix::new([[qr(1, 2), q(0)], [q(0), qr(1, 4)]])
        );
    }

    #[test]
    fn reduced_row_echelon_is_idempotent() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[q(2), q(1), q(1)], [q(1), q(3), q(0)], [q(0), q(1), q(4)]]),
            [q(1), q(2), q(3)],
        );
        let once = aug.reduced_row_echelon().unwrap();
        let twice = once.reduced_row_echelon().unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.coefficients(), &Matrix::identity());
    }

    #[test]
    fn eliminate_requires_a_donor() {
        // Row 1 is zero everywhere, so nothing can eliminate (1, 0) once
        // row 0 is excluded as its own donor.
        let mut aug = AugmentedMatrix::new(
            Matrix::new([[q(1), q(1)], [q(0), q(0)]]),
            [q(1), q(0)],
        );
        assert_eq!(
            aug.eliminate_from_right(1, 0),
            Err(LinalgError::NonEliminable { column: 1, row: 0 })
        );
        assert_eq!(
            aug.eliminate_from_below(1, 0),
            Err(LinalgError::NonEliminable { column: 1, row: 0 })
        );
    }

    #[test]
    fn eliminate_is_a_no_op_on_zero_entries() {
        let original = AugmentedMatrix::new(
            Matrix::new([[q(1), q(0)], [q(0), q(1)]]),
            [q(1), q(2)],
        );
        let mut aug = original.clone();
        aug.eliminate_from_right(1, 0).unwrap();
        assert_eq!(aug, original);
    }

    #[test]
    fn float_systems_solve_within_tolerance() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[2.0, 1.0], [1.0, 3.0]]),
            [5.0, 10.0],
        );
        let [x, y]: [f64; 2] = aug.solve().unwrap();
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn single_precision_systems_solve_within_tolerance() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[2.0_f32, 1.0], [1.0, 3.0]]),
            [5.0, 10.0],
        );
        let [x, y] = aug.solve().unwrap();
        assert!((x - 1.0).abs() < 1e-4);
        assert!((y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn display_renders_rows_with_auxiliary() {
        let aug = AugmentedMatrix::new(
            Matrix::new([[1.0, 2.0], [3.0, 4.0]]),
            [5.0, 6.0],
        );
        assert_eq!(
            aug.to_string(),
            "|\t1.00\t2.00\t|\t5.00\t|\n|\t3.00\t4.00\t|\t6.00\t|"
        );
    }
}
