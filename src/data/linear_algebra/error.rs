//! # Error reporting for sparse matrix operations
//!
//! All failures are detected locally and synchronously, before any of the matrix's arrays is
//! modified.
use std::fmt;

use thiserror::Error;

/// A `MatrixError` is returned when an operation on a `SparseMatrix` or its `SparsityPattern`
/// cannot be carried out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A (row, column) index lies outside of the matrix dimensions.
    #[error("index ({row}, {column}) out of range for a {nr_rows}x{nr_columns} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows of the matrix.
        nr_rows: usize,
        /// Number of columns of the matrix.
        nr_columns: usize,
    },
    /// A position in one of the arrays of a sparsity pattern does not exist.
    #[error("position {position} out of range for an array of length {len}")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Length of the array.
        len: usize,
    },
    /// The number of values provided does not fit the requested shape.
    #[error("{len} values can't be shaped into a {nr_rows}x{nr_columns} matrix")]
    DimensionMismatch {
        /// Number of values provided.
        len: usize,
        /// Requested number of rows.
        nr_rows: usize,
        /// Requested number of columns.
        nr_columns: usize,
    },
    /// Only a matrix with a single element can be printed as a scalar.
    #[error("a {nr_rows}x{nr_columns} matrix is not a scalar")]
    InvalidPrintTarget {
        /// Number of rows of the matrix.
        nr_rows: usize,
        /// Number of columns of the matrix.
        nr_columns: usize,
    },
    /// The output being printed to refused the text.
    #[error("failed to write matrix: {0}")]
    Format(#[from] fmt::Error),
}
