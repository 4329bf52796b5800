//! # Text rendering
//!
//! Every unstored position is rendered as the structural zero:
//!
//! * no positions: `<empty expression>`
//! * one position: the value itself
//! * one column: `[R](v0,v1,...)`
//! * otherwise: `[R,C]((r0_0,r0_1,...),(r1_0,...),...)`
use std::fmt::{self, Display, Write};

use itertools::Itertools;

use crate::data::linear_algebra::error::MatrixError;
use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::SparseElement;

const EMPTY: &str = "<empty expression>";

impl<T: SparseElement + Display> SparseMatrix<T> {
    /// Write this matrix to `out`, choosing the presentation based on its dimensions.
    pub fn print<W: Write>(&self, out: &mut W) -> Result<(), MatrixError> {
        if self.empty() {
            out.write_str(EMPTY)?;
            Ok(())
        } else if self.scalar() {
            self.print_scalar(out)
        } else if self.vector() {
            self.print_vector(out)
        } else {
            self.print_matrix(out)
        }
    }

    /// Write the single value of this matrix, without decoration.
    ///
    /// # Errors
    ///
    /// `InvalidPrintTarget` if this matrix doesn't have exactly one position.
    pub fn print_scalar<W: Write>(&self, out: &mut W) -> Result<(), MatrixError> {
        if !self.scalar() {
            return Err(MatrixError::InvalidPrintTarget {
                nr_rows: self.size1(),
                nr_columns: self.size2(),
            });
        }

        write!(out, "{}", self.get_element(0, 0)?)?;
        Ok(())
    }

    /// Write the first column of this matrix as `[R](v0,v1,...)`.
    pub fn print_vector<W: Write>(&self, out: &mut W) -> Result<(), MatrixError> {
        let values = (0..self.size1())
            .map(|i| self.get(i))
            .collect::<Result<Vec<_>, _>>()?;

        write!(out, "[{}]({})", self.size1(), values.iter().format(","))?;
        Ok(())
    }

    /// Write this matrix row by row as `[R,C]((r0_0,r0_1,...),(r1_0,...),...)`.
    pub fn print_matrix<W: Write>(&self, out: &mut W) -> Result<(), MatrixError> {
        write!(out, "[{},{}](", self.size1(), self.size2())?;
        for i in 0..self.size1() {
            if i > 0 {
                out.write_char(',')?;
            }
            let values = (0..self.size2())
                .map(|j| self.get_element(i, j))
                .collect::<Result<Vec<_>, _>>()?;
            write!(out, "({})", values.iter().format(","))?;
        }
        out.write_char(')')?;

        Ok(())
    }

}

impl<T: SparseElement + Display> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f).map_err(|_| fmt::Error)
    }
}
