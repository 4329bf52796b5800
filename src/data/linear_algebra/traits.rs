//! # Traits for elements in sparse datastructures
//!
//! A sparse matrix only stores some of its positions. Every other position still has a value when
//! it is read, and that value has to come from somewhere. For numbers it is obvious: zero. For
//! other element types (symbols, expressions) the caller has to say which value plays that role.
use num_traits::Zero;

/// Element of a `SparseMatrix`.
///
/// The value returned by `structural_zero` is what every unstored position reads as, and is also
/// the value a freshly materialized slot holds before the caller writes to it.
pub trait SparseElement: Clone {
    /// Value of a logical position without a stored entry.
    fn structural_zero() -> Self;
}

impl<T: Zero + Clone> SparseElement for T {
    fn structural_zero() -> Self {
        T::zero()
    }
}
