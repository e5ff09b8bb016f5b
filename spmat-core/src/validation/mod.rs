//! Validation utilities for SPMAT
//!
//! Pure functions with no I/O: line-level parsing for the text format and
//! coordinate/shape checks used by the arithmetic.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_multiply_dimensions, within_dimensions};
pub use parsing::{parse_entry_line, parse_header, parse_header_line};
