//! File I/O for stored matrices
//!
//! Reads and writes the text format defined in `spmat_core::format`. Every
//! file handle is scoped to the call that opens it.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use spmat_core::validation::parse_header;
use spmat_core::{MatrixElement, MatrixHeader, SparseMatrix};
use tracing::debug;

use crate::{Error, Result};

/// Map an open/read failure, separating a missing path from other I/O errors
fn read_error(path: &Path, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::io(path, err)
    }
}

/// File handle for stored matrix files
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub header: MatrixHeader,
    pub path: PathBuf,
}

impl MatrixFile {
    /// Open an existing matrix file and read its header only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| read_error(path, err))?;
        let lines = BufReader::new(file)
            .lines()
            .take(MatrixHeader::LINES)
            .collect::<io::Result<Vec<String>>>()
            .map_err(|err| Error::io(path, err))?;
        let header = parse_header(lines.iter().map(String::as_str))?;

        Ok(Self {
            header,
            path: path.to_path_buf(),
        })
    }

    /// Load a full matrix from `path`
    pub fn read<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| read_error(path, err))?;
        let matrix = SparseMatrix::parse(&text)?;

        debug!(
            path = %path.display(),
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Save `matrix` to `path`, replacing any existing file
    pub fn write<T: MatrixElement, P: AsRef<Path>>(
        matrix: &SparseMatrix<T>,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| Error::io(path, err))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(matrix.serialize().as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|err| Error::io(path, err))?;

        debug!(
            path = %path.display(),
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }

    /// Load the full matrix behind this handle
    pub fn load<T: MatrixElement>(&self) -> Result<SparseMatrix<T>> {
        Self::read(&self.path)
    }
}
