//! # Sparsity patterns
//!
//! Which positions of a matrix are stored, in compressed row storage (CRS). Indices start at `0`.
use std::ops::Range;

use crate::data::linear_algebra::error::MatrixError;

/// Dimensions and the column-index / row-pointer arrays of a CRS matrix.
///
/// The entries of row `i` are found at the positions `rowind[i]..rowind[i + 1]` of `col` (and of
/// the value array of the matrix owning this pattern). Within a row, columns are strictly
/// increasing.
///
/// The pattern itself doesn't guard these invariants when it is changed; the matrix owning it does.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SparsityPattern {
    /// Column of every stored entry, length nnz.
    col: Vec<usize>,
    /// Start of every row in `col`, length `nr_rows + 1`.
    rowind: Vec<usize>,
    nr_rows: usize,
    nr_columns: usize,
}

impl SparsityPattern {
    /// Create a pattern without any stored entries.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            col: Vec::new(),
            rowind: vec![0; nr_rows + 1],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a pattern in which every position is stored.
    pub fn dense(nr_rows: usize, nr_columns: usize) -> Self {
        let col = (0..nr_rows).flat_map(|_| 0..nr_columns).collect();
        let rowind = (0..=nr_rows).map(|i| i * nr_columns).collect();

        Self { col, rowind, nr_rows, nr_columns }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.col.len()
    }

    /// Columns of all stored entries, row after row.
    pub fn col(&self) -> &[usize] {
        &self.col
    }

    /// Row pointers: row `i` occupies the positions `rowind[i]..rowind[i + 1]`.
    pub fn rowind(&self) -> &[usize] {
        &self.rowind
    }

    /// Column of the stored entry at position `el`.
    pub fn col_at(&self, el: usize) -> Result<usize, MatrixError> {
        self.col.get(el)
            .copied()
            .ok_or(MatrixError::PositionOutOfRange { position: el, len: self.col.len() })
    }

    /// Position in `col` at which row `row` starts.
    ///
    /// Valid for `row` up to and including `nr_rows`, the latter giving the total nnz.
    pub fn rowind_at(&self, row: usize) -> Result<usize, MatrixError> {
        self.rowind.get(row)
            .copied()
            .ok_or(MatrixError::PositionOutOfRange { position: row, len: self.rowind.len() })
    }

    /// Positions of the stored entries of row `i`.
    pub fn row_range(&self, i: usize) -> Range<usize> {
        debug_assert!(i < self.nr_rows);

        self.rowind[i]..self.rowind[i + 1]
    }

    /// Whether (`i`, `j`) lies within the dimensions.
    pub(crate) fn check_bounds(&self, i: usize, j: usize) -> Result<(), MatrixError> {
        if i < self.nr_rows && j < self.nr_columns {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange {
                row: i,
                column: j,
                nr_rows: self.nr_rows,
                nr_columns: self.nr_columns,
            })
        }
    }

    /// Look up the position of the entry at (`i`, `j`).
    ///
    /// # Return value
    ///
    /// `Ok` with the position in `col` when the entry is stored, `Err` with the position at which
    /// it should be inserted to keep row `i` sorted otherwise.
    pub(crate) fn find(&self, i: usize, j: usize) -> Result<usize, usize> {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        let range = self.row_range(i);
        let offset = range.start;
        self.col[range]
            .binary_search(&j)
            .map(|index| offset + index)
            .map_err(|index| offset + index)
    }

    /// Store column `j` at `position`, which lies within row `i`.
    ///
    /// All rows after `i` shift one position.
    pub(crate) fn insert(&mut self, i: usize, position: usize, j: usize) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);
        debug_assert!(self.rowind[i] <= position && position <= self.rowind[i + 1]);

        self.col.insert(position, j);
        for start in &mut self.rowind[(i + 1)..] {
            *start += 1;
        }
    }

    /// Whether the row pointers and columns describe a valid CRS structure.
    ///
    /// That is: there is a pointer for every row plus one, the first is zero, the last equals the
    /// number of stored entries, they are non-decreasing, and within each row the columns are
    /// strictly increasing and smaller than the number of columns.
    pub fn is_consistent(&self) -> bool {
        self.rowind.len() == self.nr_rows + 1
            && self.rowind[0] == 0
            && self.rowind[self.nr_rows] == self.col.len()
            && self.rowind.windows(2).all(|w| w[0] <= w[1])
            && (0..self.nr_rows).all(|i| {
                let row = &self.col[self.row_range(i)];
                row.windows(2).all(|w| w[0] < w[1])
                    && row.last().is_none_or(|&j| j < self.nr_columns)
            })
    }
}

impl Default for SparsityPattern {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
