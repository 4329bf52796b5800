//! # A sparse matrix container
//!
//! Matrices are stored in compressed row storage (CRS): the values of the stored entries, their
//! columns, and for every row the position at which its entries start. Positions that aren't
//! stored read as the structural zero of the element type and are materialized when written to.
//!
//! ```
//! use crs_matrix::data::linear_algebra::matrix::SparseMatrix;
//!
//! let mut m = SparseMatrix::<i32>::new(2, 2);
//! m.element(0, 1).write(3).unwrap();
//!
//! assert_eq!(m.nnz(), 1);
//! assert_eq!(m.to_string(), "[2,2]((0,3),(0,0))");
//! ```
#![warn(missing_docs)]

pub mod data;
