//! Error taxonomy shared by the linear algebra types.

use thiserror::Error;

/// Errors surfaced by vector, matrix and augmented-matrix operations.
///
/// All failures are detected eagerly at the point of violation and
/// propagated immediately; there is no retry, no partial result, and no
/// silent clamping.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A column index was outside `[0, bound)`.
    #[error("column index {index} out of bounds ({bound} columns)")]
    ColumnOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of columns.
        bound: usize,
    },

    /// A row index was outside `[0, bound)`.
    #[error("row index {index} out of bounds ({bound} rows)")]
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of rows.
        bound: usize,
    },

    /// The system has no unique solution: its row echelon form contains a
    /// zero row, or equivalently its determinant zero-tests as zero.
    #[error("the system is singular")]
    Singular,

    /// No donor row was available to eliminate the given entry. Reachable
    /// only through direct use of the low-level elimination primitives; the
    /// reduction drivers guard against it.
    #[error("no eliminable donor row for entry at column {column}, row {row}")]
    NonEliminable {
        /// Column of the entry that could not be eliminated.
        column: usize,
        /// Row of the entry that could not be eliminated.
        row: usize,
    },

    /// The requested target dimensions do not match the operation.
    #[error(
        "target dimensions {actual_cols}x{actual_rows} do not match expected {expected_cols}x{expected_rows}"
    )]
    DimensionMismatch {
        /// Expected number of columns.
        expected_cols: usize,
        /// Expected number of rows.
        expected_rows: usize,
        /// Requested number of columns.
        actual_cols: usize,
        /// Requested number of rows.
        actual_rows: usize,
    },
}
