//! Text format definitions
//!
//! A stored matrix is two header lines followed by one line per entry:
//!
//! ```text
//! rows=3
//! cols=4
//! (0, 1, 7)
//! (2, 3, -2)
//! ```

use core::fmt;

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const KEY_SEPARATOR: char = '=';

/// Declared dimensions carried by the two header lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl MatrixHeader {
    /// Number of lines the header occupies
    pub const LINES: usize = 2;

    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }
}

impl fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_KEY}{KEY_SEPARATOR}{}", self.nrows)?;
        write!(f, "{COLS_KEY}{KEY_SEPARATOR}{}", self.ncols)
    }
}

/// One stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_header_display() {
        assert_eq!(MatrixHeader::new(3, 4).to_string(), "rows=3\ncols=4");
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::new(2, 0, -5i64).to_string(), "(2, 0, -5)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_entry_serde() {
        let entry = Entry::new(1, 2, 3i64);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2,"value":3}"#);
        let back: Entry<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
