//! SPMAT - Sparse Integer Matrices
//!
//! This library stores sparse integer matrices as hash maps of non-zero
//! entries, combines them with addition, subtraction and multiplication, and
//! loads/saves them in a small line-oriented text format.
//!
//! ## Architecture
//!
//! - **spmat-core**: Data model, arithmetic and string codec (no I/O)
//! - **spmat**: File-backed storage, logging, progress reporting and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{MatrixFile, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let left: SparseMatrix = MatrixFile::read("left.txt")?;
//!     let right: SparseMatrix = MatrixFile::read("right.txt")?;
//!
//!     let sum = left.add(&right)?;
//!     println!("{}", sum.render());
//!     MatrixFile::write(&sum, "addition_result.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use spmat_core::{
    // Data model
    Entry, Iter, MatrixHeader, Operation, SparseMatrix,
    // Traits
    MatrixElement, MatrixOperations, MatrixView,
    // Core errors
    ErrorCategory, SpmatError,
};

pub mod error;
pub mod file_io;
pub mod progress;

pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use progress::{Progress, Silent};

#[cfg(feature = "cli")]
pub use progress::Spinner;
