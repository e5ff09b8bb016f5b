//! Line parsing for the SPMAT text format
//!
//! Every failure is reported as [`SpmatError::MalformedEntry`] carrying the
//! 1-based line number and the raw line.

use crate::format::{Entry, MatrixHeader, COLS_KEY, KEY_SEPARATOR, ROWS_KEY};
use crate::{MatrixElement, SpmatError};

/// Parse the two header lines from the start of `lines`
///
/// Consumes at most [`MatrixHeader::LINES`] items, so the caller can keep
/// reading entries from the same iterator. A missing line is reported with
/// its expected line number and empty content.
pub fn parse_header<'a, I>(lines: I) -> Result<MatrixHeader, SpmatError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    let mut next = |line_number: usize, key: &str| match lines.next() {
        Some(line) => parse_header_line(line_number, line, key),
        None => Err(SpmatError::malformed(line_number, "")),
    };

    let nrows = next(1, ROWS_KEY)?;
    let ncols = next(2, COLS_KEY)?;
    Ok(MatrixHeader::new(nrows, ncols))
}

/// Parse a `key=value` header line into a dimension
///
/// Whitespace around the key and the value is ignored. The key must match
/// exactly and the value must be a non-negative integer.
pub fn parse_header_line(line_number: usize, line: &str, key: &str) -> Result<usize, SpmatError> {
    let malformed = || SpmatError::malformed(line_number, line);

    let (found_key, value) = line.split_once(KEY_SEPARATOR).ok_or_else(malformed)?;
    if found_key.trim() != key {
        return Err(malformed());
    }

    parse_index(value).ok_or_else(malformed)
}

/// Parse a `(row, col, value)` entry line
pub fn parse_entry_line<T: MatrixElement>(
    line_number: usize,
    line: &str,
) -> Result<Entry<T>, SpmatError> {
    let malformed = || SpmatError::malformed(line_number, line);

    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let row = parse_index(row).ok_or_else(malformed)?;
    let col = parse_index(col).ok_or_else(malformed)?;
    let value = value.trim().parse::<T>().map_err(|_| malformed())?;

    Ok(Entry::new(row, col, value))
}

/// Parse a non-negative index, tolerating surrounding whitespace
fn parse_index(token: &str) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
