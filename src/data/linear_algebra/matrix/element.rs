//! # Deferred element access
//!
//! Whether accessing a position only reads it or materializes it is decided when the handle is
//! used, not when it is created.
use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::SparseElement;

/// A position (`row`, `column`) in a borrowed `SparseMatrix`.
///
/// The handle borrows the matrix mutably, so no other reference into it can be alive at the same
/// time; in particular, no reference into the value storage can survive an insertion triggered
/// through the handle.
#[derive(Debug)]
pub struct ElementHandle<'a, T> {
    matrix: &'a mut SparseMatrix<T>,
    row: usize,
    column: usize,
}

impl<'a, T> ElementHandle<'a, T> {
    pub(super) fn new(matrix: &'a mut SparseMatrix<T>, row: usize, column: usize) -> Self {
        Self { matrix, row, column }
    }

    /// Row of the position.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the position.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl<'a, T: SparseElement> ElementHandle<'a, T> {
    /// Value at the position, the structural zero if it isn't stored.
    ///
    /// Never changes the structure of the matrix.
    pub fn read(&self) -> Result<T, MatrixError> {
        self.matrix.get_element(self.row, self.column)
    }

    /// Store `value` at the position, inserting a new entry if needed.
    pub fn write(self, value: T) -> Result<(), MatrixError> {
        *self.slot()? = value;

        Ok(())
    }

    /// The storage of the position, inserting a new entry holding the structural zero if needed.
    pub fn slot(self) -> Result<&'a mut T, MatrixError> {
        let Self { matrix, row, column } = self;
        matrix.get_element_ref(row, column)
    }
}
