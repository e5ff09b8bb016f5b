//! Coordinate and shape validation

use crate::SpmatError;

/// Check that a coordinate lies inside `(nrows, ncols)`
pub const fn within_dimensions(row: usize, col: usize, dimensions: (usize, usize)) -> bool {
    row < dimensions.0 && col < dimensions.1
}

/// Validate that `left * right` is defined
///
/// The column count of the left operand must equal the row count of the
/// right operand.
pub fn validate_multiply_dimensions(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.1 != right.0 {
        return Err(SpmatError::DimensionMismatch { left, right });
    }
    Ok(())
}
