//! Error types for SPMAT operations

use alloc::string::String;

use crate::ops::Operation;

/// Errors that can occur while parsing or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpmatError {
    /// A header or entry line does not match the text format
    MalformedEntry {
        /// 1-based line number
        line: usize,
        /// Raw content of the offending line
        content: String,
    },
    /// Multiplication operands are not compatible
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Integer overflow while computing a result cell
    Overflow { op: Operation, row: usize, col: usize },
}

/// Coarse classification of [`SpmatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Text format violations
    Parse,
    /// Incompatible operand shapes
    Shape,
    /// Value range problems
    Arithmetic,
}

impl SpmatError {
    pub(crate) fn malformed(line: usize, content: &str) -> Self {
        SpmatError::MalformedEntry {
            line,
            content: String::from(content),
        }
    }

    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::MalformedEntry { .. } => ErrorCategory::Parse,
            SpmatError::DimensionMismatch { .. } => ErrorCategory::Shape,
            SpmatError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::MalformedEntry { line, content } => {
                write!(f, "Malformed entry on line {line}: {content:?}")
            }
            SpmatError::DimensionMismatch { left, right } => write!(
                f,
                "Dimension mismatch: cannot multiply {}x{} by {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::Overflow { op, row, col } => {
                write!(f, "Integer overflow during {op} at ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for SPMAT operations
pub type Result<T> = core::result::Result<T, SpmatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        let err = SpmatError::malformed(3, "(1,2)");
        assert_eq!(err.to_string(), "Malformed entry on line 3: \"(1,2)\"");

        let err = SpmatError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: cannot multiply 2x3 by 2x2"
        );

        let err = SpmatError::Overflow {
            op: Operation::Multiply,
            row: 0,
            col: 1,
        };
        assert_eq!(
            err.to_string(),
            "Integer overflow during multiplication at (0, 1)"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(
            SpmatError::malformed(1, "").category(),
            ErrorCategory::Parse
        );
        assert_eq!(
            SpmatError::DimensionMismatch {
                left: (1, 1),
                right: (2, 2)
            }
            .category(),
            ErrorCategory::Shape
        );
    }
}
