//! Sparse matrix arithmetic
//!
//! Every operation borrows both operands and builds a fresh result through
//! [`SparseMatrix::set`], so zero sums never end up stored.
//!
//! Results are sized `max(rows) x max(cols)` of the two operands. Addition
//! and subtraction accept mismatched shapes and clip entries falling outside
//! the result; multiplication additionally requires
//! `self.ncols() == other.nrows()`.

use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::validation::{validate_multiply_dimensions, within_dimensions};
use crate::{MatrixElement, Result, SparseMatrix, SpmatError};

/// Binary matrix operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations, in the order a full run performs them
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Apply the scalar form of this operation with overflow checking
    pub fn apply<T: MatrixElement>(self, lhs: T, rhs: T) -> Option<T> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
        }
    }

    /// Apply this operation to two matrices
    pub fn evaluate<T: MatrixElement>(
        self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Element-wise sum, sized to hold both operands
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Add)
    }

    /// Element-wise difference `self - other`, sized to hold both operands
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Subtract)
    }

    /// Matrix product `self * other`
    ///
    /// Fails with [`SpmatError::DimensionMismatch`] unless
    /// `self.ncols() == other.nrows()`. Only the stored entries of `self`
    /// drive the outer loop, and `other` is grouped by row once, so cost is
    /// bounded by the non-zero structure rather than the dense shape.
    ///
    /// Each cell is summed exactly and narrowed once, so overflow is reported
    /// only when a final cell value does not fit in `T`, or, for `i128`, when
    /// a single product does not.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        validate_multiply_dimensions(self.dimensions(), other.dimensions())?;

        let (nrows, ncols) = self.result_dimensions(other);
        let mut result = Self::new(nrows, ncols);
        let other_rows = other.row_index();

        let overflow = |row, col| SpmatError::Overflow {
            op: Operation::Multiply,
            row,
            col,
        };

        let mut sums: HashMap<(usize, usize), CellSum> = HashMap::new();
        for ((row, col), value) in self.iter() {
            let Some(other_row) = other_rows.get(&col) else {
                continue;
            };
            for &(other_col, other_value) in other_row {
                let product = value
                    .widen()
                    .checked_mul(other_value.widen())
                    .ok_or_else(|| overflow(row, other_col))?;
                sums.entry((row, other_col)).or_default().push(product);
            }
        }

        for ((row, col), sum) in sums {
            let value = sum
                .value()
                .and_then(T::narrow)
                .ok_or_else(|| overflow(row, col))?;
            result.set(row, col, value);
        }

        Ok(result)
    }

    /// Shared add/subtract pass over both operands
    ///
    /// A coordinate present in both operands is visited twice; each visit
    /// recomputes `self[rc] op other[rc]` from scratch.
    fn elementwise(&self, other: &Self, op: Operation) -> Result<Self> {
        let dimensions = self.result_dimensions(other);
        let mut result = Self::new(dimensions.0, dimensions.1);

        let overflow = |row, col| SpmatError::Overflow { op, row, col };

        for ((row, col), value) in self.iter() {
            if within_dimensions(row, col, dimensions) {
                let combined = op
                    .apply(value, other.get(row, col))
                    .ok_or_else(|| overflow(row, col))?;
                result.set(row, col, combined);
            }
        }

        for ((row, col), value) in other.iter() {
            if within_dimensions(row, col, dimensions) {
                let combined = op
                    .apply(self.get(row, col), value)
                    .ok_or_else(|| overflow(row, col))?;
                result.set(row, col, combined);
            }
        }

        Ok(result)
    }

    fn result_dimensions(&self, other: &Self) -> (usize, usize) {
        (
            self.nrows().max(other.nrows()),
            self.ncols().max(other.ncols()),
        )
    }

    /// Group entries by row, keeping only columns inside the declared width
    fn row_index(&self) -> HashMap<usize, Vec<(usize, T)>> {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for ((row, col), value) in self.iter() {
            if col < self.ncols() {
                rows.entry(row).or_default().push((col, value));
            }
        }
        rows
    }
}

/// Exact running sum of products for one result cell
///
/// Terms wrap in `i128` while `carry` counts the net number of wraps, so the
/// final value does not depend on the order the terms arrive in.
#[derive(Debug, Clone, Copy, Default)]
struct CellSum {
    low: i128,
    carry: i64,
}

impl CellSum {
    fn push(&mut self, term: i128) {
        let (low, wrapped) = self.low.overflowing_add(term);
        if wrapped {
            self.carry += if term > 0 { 1 } else { -1 };
        }
        self.low = low;
    }

    /// The exact sum, `None` when it lies outside `i128`
    fn value(self) -> Option<i128> {
        (self.carry == 0).then_some(self.low)
    }
}
