//! Core matrix abstraction traits
//!
//! These are pure interfaces; [`crate::SparseMatrix`] is the only
//! implementation in this crate.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Format-agnostic read access to a sparse matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored). Positions
    /// outside the declared dimensions are not an error.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column slicing over the stored entries
pub trait MatrixOperations: MatrixView {
    /// All non-zero `(col, value)` pairs of a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// All non-zero `(row, value)` pairs of a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
