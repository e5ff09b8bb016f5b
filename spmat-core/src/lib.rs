#![no_std]

//! SPMAT Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the sparse matrix data model, its arithmetic and the
//! line-oriented text codec. It performs no I/O; file access lives in the
//! `spmat` crate.

extern crate alloc;

pub mod codec;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Entry, MatrixHeader};
pub use matrix::{Iter, SparseMatrix};
pub use ops::Operation;
pub use traits::{MatrixElement, MatrixOperations, MatrixView};
