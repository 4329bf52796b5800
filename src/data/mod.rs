//! # Storing of sparse matrices in memory
//!
//! This module provides the data structures used to represent sparse matrices in memory. They are
//! containers only: arithmetic is left to the code using them.

pub mod linear_algebra;
