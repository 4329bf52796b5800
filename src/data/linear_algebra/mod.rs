//! # Linear algebra primitives
//!
//! Sparse matrices in compressed row storage, and the sparsity patterns describing which of their
//! positions are stored.

pub mod error;
pub mod matrix;
pub mod sparsity;
pub mod traits;
