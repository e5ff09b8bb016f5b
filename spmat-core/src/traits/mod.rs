//! Abstract interfaces for SPMAT matrices
//!
//! This module defines the element contract and the format-agnostic
//! access traits implemented by [`crate::SparseMatrix`].

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, MatrixView};
