//! File round trips and load failures through `MatrixFile`

use std::fs;

use spmat::{Entry, Error, MatrixFile, SparseMatrix, SpmatError};
use tempfile::TempDir;

fn sample() -> SparseMatrix {
    let mut m = SparseMatrix::new(4, 5);
    m.set(0, 4, 12);
    m.set(3, 0, -6);
    m.set(2, 2, 1);
    m
}

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");

    let m = sample();
    MatrixFile::write(&m, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "rows=4\ncols=5\n(0, 4, 12)\n(2, 2, 1)\n(3, 0, -6)\n"
    );

    let back: SparseMatrix = MatrixFile::read(&path).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");
    fs::write(&path, "stale contents that are much longer than the matrix\n").unwrap();

    MatrixFile::write(&SparseMatrix::<i64>::new(1, 1), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "rows=1\ncols=1\n");
}

#[test]
fn test_zeroed_entry_is_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");

    let mut m = sample();
    m.set(2, 2, 0);
    MatrixFile::write(&m, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("(2, 2,"));
    let back: SparseMatrix = MatrixFile::read(&path).unwrap();
    assert_eq!(back.get(2, 2), 0);
}

#[test]
fn test_malformed_third_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "rows=2\ncols=2\n(1,2)\n").unwrap();

    let err = MatrixFile::read::<i64, _>(&path).unwrap_err();
    match err {
        Error::Matrix(SpmatError::MalformedEntry { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "(1,2)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");
    let err = MatrixFile::read::<i64, _>(&path).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { path: p } if p == path));
}

#[test]
fn test_write_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("out.txt");
    let err = MatrixFile::write(&sample(), &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("a.txt");
    let b_path = dir.path().join("b.txt");
    fs::write(&a_path, "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
    fs::write(&b_path, "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n").unwrap();

    let a: SparseMatrix = MatrixFile::read(&a_path).unwrap();
    let b: SparseMatrix = MatrixFile::read(&b_path).unwrap();

    let sum = a.add(&b).unwrap();
    assert_eq!(
        sum.sorted_entries(),
        vec![Entry::new(0, 0, 4), Entry::new(0, 1, 4), Entry::new(1, 1, 2)]
    );

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.render(), "(0, 0, 3)\n(0, 1, 4)");

    let out = dir.path().join("multiplication_result.txt");
    MatrixFile::write(&product, &out).unwrap();
    let header = MatrixFile::open(&out).unwrap().header;
    assert_eq!((header.nrows, header.ncols), (2, 2));
}
