//! Hash-map backed sparse matrix storage
//!
//! Only non-zero entries are stored. Writing a zero removes the
//! coordinate, so every matrix built through [`SparseMatrix::set`] keeps the
//! zero-elision invariant.

use alloc::vec::Vec;
use hashbrown::{hash_map, HashMap};

use crate::format::Entry;
use crate::{MatrixElement, MatrixOperations, MatrixView};

/// Sparse matrix of integer elements
///
/// Dimensions are fixed at construction. Entries are not required to lie
/// inside the declared dimensions; range checks are left to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    nrows: usize,
    ncols: usize,
    /// `entries[(r, c)]` = non-zero value at (`r`, `c`)
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::new(),
        }
    }

    /// Create an empty matrix with room for `nnz` entries
    pub fn with_capacity(nrows: usize, ncols: usize, nnz: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: HashMap::with_capacity(nnz),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at (`row`, `col`), zero when nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Store `value` at (`row`, `col`)
    ///
    /// A zero value removes the coordinate instead of storing it.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Whether a non-zero value is stored at (`row`, `col`)
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Iterate stored entries in unspecified order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.entries.iter(),
        }
    }

    /// Stored entries ordered by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self
            .iter()
            .map(|((row, col), value)| Entry::new(row, col, value))
            .collect();
        entries.sort_unstable_by_key(|entry| (entry.row, entry.col));
        entries
    }
}

impl<'a, T: MatrixElement> IntoIterator for &'a SparseMatrix<T> {
    type Item = ((usize, usize), T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `((row, col), value)` pairs of a [`SparseMatrix`]
pub struct Iter<'a, T> {
    iter: hash_map::Iter<'a, (usize, usize), T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = ((usize, usize), T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&(row, col), &value)| ((row, col), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .iter()
            .filter(|&((row, _), _)| row == row_index)
            .map(|((_, col), value)| (col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .iter()
            .filter(|&((_, col), _)| col == col_index)
            .map(|((row, _), value)| (row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}
