//! # Sparse matrices
//!
//! A `SparseMatrix` stores some of its positions explicitly in compressed row storage and reads
//! every other position as the structural zero of its element type. Writing to a position that
//! isn't stored materializes it.
use itertools::repeat_n;
use tracing::{debug, trace};

pub use element::ElementHandle;

use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::sparsity::SparsityPattern;
use crate::data::linear_algebra::traits::SparseElement;

mod element;
mod print;

/// Uses a `SparsityPattern` and a `Vec` of values of equal length as underlying data structures.
///
/// `values[k]` is the value of the entry at position `k` of the pattern's column array. Indices
/// start at `0`.
///
/// Equality is structural: two matrices that read the same at every position but store different
/// positions are not equal.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SparseMatrix<T> {
    pattern: SparsityPattern,
    values: Vec<T>,
}

impl<T> SparseMatrix<T> {
    /// Create a matrix of dimension `nr_rows` x `nr_columns` without any stored entries.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            pattern: SparsityPattern::new(nr_rows, nr_columns),
            values: Vec::new(),
        }
    }

    /// Create a matrix of dimension `nr_rows` x `nr_columns` storing `value` at every position.
    pub fn dense(nr_rows: usize, nr_columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            pattern: SparsityPattern::dense(nr_rows, nr_columns),
            values: repeat_n(value, nr_rows * nr_columns).collect(),
        }
    }

    /// Create a 1 x 1 matrix holding `value`.
    pub fn from_scalar(value: T) -> Self {
        Self {
            pattern: SparsityPattern::dense(1, 1),
            values: vec![value],
        }
    }

    /// Create a dense column vector from the provided data.
    pub fn from_vec<A: Into<T>>(data: Vec<A>) -> Self {
        let nr_rows = data.len();

        Self {
            pattern: SparsityPattern::dense(nr_rows, 1),
            values: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a dense matrix from the provided data, which is read row after row.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of values is not `nr_rows * nr_columns`, including when
    /// that product doesn't fit in a `usize`.
    pub fn from_vec_with_shape<A: Into<T>>(
        data: Vec<A>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> Result<Self, MatrixError> {
        if nr_rows.checked_mul(nr_columns) != Some(data.len()) {
            return Err(MatrixError::DimensionMismatch { len: data.len(), nr_rows, nr_columns });
        }

        Ok(Self {
            pattern: SparsityPattern::dense(nr_rows, nr_columns),
            values: data.into_iter().map(Into::into).collect(),
        })
    }

    /// Reinitialize as a dense `nr_rows` x `nr_columns` matrix filled with `value`.
    ///
    /// All previous contents are discarded.
    pub fn make_dense(&mut self, nr_rows: usize, nr_columns: usize, value: T)
    where
        T: Clone,
    {
        debug!(nr_rows, nr_columns, "reinitializing sparse matrix as dense");

        self.pattern = SparsityPattern::dense(nr_rows, nr_columns);
        self.values.clear();
        self.values.extend(repeat_n(value, nr_rows * nr_columns));
    }

    /// Reinitialize as a `nr_rows` x `nr_columns` matrix without stored entries.
    ///
    /// All previous contents are discarded.
    pub fn make_empty(&mut self, nr_rows: usize, nr_columns: usize) {
        debug!(nr_rows, nr_columns, "reinitializing sparse matrix as empty");

        self.pattern = SparsityPattern::new(nr_rows, nr_columns);
        self.values.clear();
    }

    /// Get the number of rows in this matrix.
    pub fn size1(&self) -> usize {
        self.pattern.nr_rows()
    }

    /// Get the number of columns in this matrix.
    pub fn size2(&self) -> usize {
        self.pattern.nr_columns()
    }

    /// Get the number of logical positions in this matrix, stored or not.
    ///
    /// # Panics
    ///
    /// If that number doesn't fit in a `usize`. Only matrices without stored entries can be that
    /// large; `empty`, `scalar` and `vector` never overflow.
    pub fn numel(&self) -> usize {
        match self.size1().checked_mul(self.size2()) {
            Some(numel) => numel,
            None => panic!("{}x{} matrix has more positions than fit in a usize", self.size1(), self.size2()),
        }
    }

    /// Get the number of stored entries in this matrix.
    ///
    /// Stored entries may have value zero.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Whether this matrix has no positions at all.
    pub fn empty(&self) -> bool {
        self.size1() == 0 || self.size2() == 0
    }

    /// Whether this matrix is 1 x 1, regardless of whether that position is stored.
    pub fn scalar(&self) -> bool {
        self.size1() == 1 && self.size2() == 1
    }

    /// Whether this matrix has a single column.
    pub fn vector(&self) -> bool {
        self.size2() == 1
    }

    /// The sparsity pattern of this matrix.
    pub fn sparsity(&self) -> &SparsityPattern {
        &self.pattern
    }

    /// Columns of all stored entries, row after row.
    pub fn col(&self) -> &[usize] {
        self.pattern.col()
    }

    /// Row pointers of the stored entries.
    pub fn rowind(&self) -> &[usize] {
        self.pattern.rowind()
    }

    /// Column of the stored entry at position `el`.
    pub fn col_at(&self, el: usize) -> Result<usize, MatrixError> {
        self.pattern.col_at(el)
    }

    /// Position at which the stored entries of row `row` start.
    pub fn rowind_at(&self, row: usize) -> Result<usize, MatrixError> {
        self.pattern.rowind_at(row)
    }

    /// Stored values, in the order of the column array of the sparsity pattern.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Return value
    ///
    /// A copy of the stored value, or the structural zero when the position isn't stored.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` or `j` exceeds the dimensions.
    pub fn get_element(&self, i: usize, j: usize) -> Result<T, MatrixError>
    where
        T: SparseElement,
    {
        self.pattern.check_bounds(i, j)?;

        Ok(match self.pattern.find(i, j) {
            Ok(position) => self.values[position].clone(),
            Err(_) => T::structural_zero(),
        })
    }

    /// Get a mutable reference to the value at coordinate (`i`, `j`).
    ///
    /// If the position isn't stored yet, a new entry holding the structural zero is inserted at
    /// its sorted place in row `i`. This shifts all later entries, so it costs `O(nnz)`. Repeated
    /// calls for the same position return the same slot.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` or `j` exceeds the dimensions, in which case nothing changed.
    pub fn get_element_ref(&mut self, i: usize, j: usize) -> Result<&mut T, MatrixError>
    where
        T: SparseElement,
    {
        self.pattern.check_bounds(i, j)?;

        let position = match self.pattern.find(i, j) {
            Ok(position) => position,
            Err(position) => {
                self.pattern.insert(i, position, j);
                self.values.insert(position, T::structural_zero());
                trace!(row = i, column = j, position, nnz = self.values.len(), "materialized entry");

                debug_assert_eq!(self.values.len(), self.pattern.nnz());
                debug_assert!(self.pattern.is_consistent());
                position
            }
        };

        Ok(&mut self.values[position])
    }

    /// Get the value at row `i` of the first column, the way column vectors are indexed.
    pub fn get(&self, i: usize) -> Result<T, MatrixError>
    where
        T: SparseElement,
    {
        self.get_element(i, 0)
    }

    /// Access the element at row `i` of the first column for reading or writing.
    pub fn element_at(&mut self, i: usize) -> ElementHandle<'_, T> {
        self.element(i, 0)
    }

    /// Access the element at coordinate (`i`, `j`) for reading or writing.
    ///
    /// Nothing is checked or changed until the handle is used.
    pub fn element(&mut self, i: usize, j: usize) -> ElementHandle<'_, T> {
        ElementHandle::new(self, i, j)
    }
}

impl<T> Default for SparseMatrix<T> {
    /// An empty 0 x 0 matrix.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> FromIterator<T> for SparseMatrix<T> {
    /// Collect into a dense column vector.
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect::<Vec<T>>())
    }
}
