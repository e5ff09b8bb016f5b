//! Text codec for sparse matrices
//!
//! Converts between [`SparseMatrix`] and the stored text form described in
//! [`crate::format`]. Output is always ordered by `(row, col)`, so the same
//! matrix serializes to the same bytes.

use alloc::string::String;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::format::MatrixHeader;
use crate::validation::{parse_entry_line, parse_header};
use crate::{MatrixElement, Result, SparseMatrix, SpmatError};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Parse a matrix from its stored text form
    ///
    /// The first two lines must be the `rows=` and `cols=` header. Every
    /// following non-blank line must be a `(row, col, value)` triple.
    /// Parsing stops at the first malformed line.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = parse_header(lines.by_ref())?;

        let mut matrix = Self::new(header.nrows, header.ncols);
        for (idx, line) in lines.enumerate() {
            let line_number = idx + 1 + MatrixHeader::LINES;
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_entry_line::<T>(line_number, line)?;
            matrix.set(entry.row, entry.col, entry.value);
        }

        Ok(matrix)
    }

    /// Declared dimensions as a header
    pub fn header(&self) -> MatrixHeader {
        MatrixHeader::new(self.nrows(), self.ncols())
    }

    /// Write the stored text form, header included, to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.header())?;
        for entry in self.sorted_entries() {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }

    /// Stored text form as a string
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    /// Human-readable listing of the entries, one `(row, col, value)` per line
    ///
    /// Unlike [`SparseMatrix::serialize`] this carries no header.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{self}");
        out
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = SpmatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.sorted_entries().iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entry;
    use alloc::vec;

    const SAMPLE: &str = "rows=3\ncols=4\n(0, 1, 7)\n(2, 3, -2)\n";

    #[test]
    fn test_parse() {
        let m: SparseMatrix = SparseMatrix::parse(SAMPLE).unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.get(0, 1), 7);
        assert_eq!(m.get(2, 3), -2);
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let text = " rows = 2 \r\ncols= 2\r\n\r\n  (0,0,  1) \n\n( 1 , 1 , 2 )";
        let m: SparseMatrix = text.parse().unwrap();
        assert_eq!(
            m.sorted_entries(),
            vec![Entry::new(0, 0, 1), Entry::new(1, 1, 2)]
        );
    }

    #[test]
    fn test_parse_header_only() {
        let m: SparseMatrix = SparseMatrix::parse("rows=5\ncols=6").unwrap();
        assert_eq!(m.dimensions(), (5, 6));
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_elides_zero_and_keeps_last_duplicate() {
        let text = "rows=2\ncols=2\n(0, 0, 0)\n(1, 0, 3)\n(1, 0, 9)\n";
        let m: SparseMatrix = SparseMatrix::parse(text).unwrap();
        assert!(!m.contains(0, 0));
        assert_eq!(m.get(1, 0), 9);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_parse_malformed_entry() {
        let text = "rows=2\ncols=2\n(1,2)\n(0, 0, 1)\n";
        assert_eq!(
            SparseMatrix::<i64>::parse(text),
            Err(SpmatError::MalformedEntry {
                line: 3,
                content: "(1,2)".into()
            })
        );
    }

    #[test]
    fn test_parse_bad_header() {
        assert_eq!(
            SparseMatrix::<i64>::parse("rows=abc\ncols=2\n"),
            Err(SpmatError::malformed(1, "rows=abc"))
        );
        assert_eq!(
            SparseMatrix::<i64>::parse("rows=2\n"),
            Err(SpmatError::malformed(2, ""))
        );
        assert_eq!(
            SparseMatrix::<i64>::parse(""),
            Err(SpmatError::malformed(1, ""))
        );
        assert_eq!(
            SparseMatrix::<i64>::parse("cols=2\nrows=2\n"),
            Err(SpmatError::malformed(1, "cols=2"))
        );
    }

    #[test]
    fn test_serialize_is_sorted_and_canonical() {
        let mut m = SparseMatrix::new(3, 3);
        m.set(2, 2, 1i64);
        m.set(0, 1, -4);
        m.set(1, 0, 0);
        assert_eq!(m.serialize(), "rows=3\ncols=3\n(0, 1, -4)\n(2, 2, 1)\n");
    }

    #[test]
    fn test_serialize_round_trip() {
        let m: SparseMatrix = SparseMatrix::parse(SAMPLE).unwrap();
        let back: SparseMatrix = SparseMatrix::parse(&m.serialize()).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.serialize(), m.serialize());
    }

    #[test]
    fn test_render() {
        let m: SparseMatrix = SparseMatrix::parse(SAMPLE).unwrap();
        assert_eq!(m.render(), "(0, 1, 7)\n(2, 3, -2)");
        assert_eq!(SparseMatrix::<i64>::new(1, 1).render(), "");
    }
}
