//! Error types for file-backed matrix operations

use std::path::PathBuf;

use spmat_core::{ErrorCategory, SpmatError};
use thiserror::Error;

/// Top-level error type for the `spmat` crate
#[derive(Error, Debug)]
pub enum Error {
    /// The source path of a load does not exist
    #[error("Matrix file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other failure reading or writing a path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse or arithmetic failure from the core
    #[error(transparent)]
    Matrix(#[from] SpmatError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Core error category, if this error came from the core
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Matrix(err) => Some(err.category()),
            _ => None,
        }
    }

    /// Whether this is a multiplication shape failure
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Error::Matrix(SpmatError::DimensionMismatch { .. }))
    }
}

/// Result type for `spmat` operations
pub type Result<T> = std::result::Result<T, Error>;
