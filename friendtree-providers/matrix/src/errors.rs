use friendtree_core::AdjacencyError;
use thiserror::Error;

/// Errors raised while loading a graph from matrix and names files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatrixSourceError {
    /// The adjacency input held no lines.
    #[error("adjacency input is empty")]
    EmptyInput,
    /// The first line did not start with the `Friend` header cell.
    #[error("line {line} must start with `Friend`, found `{found}`")]
    MissingHeader { line: u64, found: String },
    /// An id cell could not be parsed.
    #[error("line {line}: `{value}` is not a valid uid")]
    InvalidUid { line: u64, value: String },
    /// An adjacency cell was neither `0` nor `1`.
    #[error("line {line}, column {column}: expected `0` or `1`, found `{value}`")]
    InvalidCell {
        line: u64,
        column: usize,
        value: String,
    },
    /// A row held a different number of cells than the header has ids.
    #[error("line {line} has {actual} cells but the header lists {expected} ids")]
    RowLength {
        line: u64,
        expected: usize,
        actual: usize,
    },
    /// The header listed the same id twice.
    #[error("header lists uid {uid} more than once")]
    DuplicateColumn { uid: u64 },
    /// Two rows carried the same label.
    #[error("line {line} repeats the row for uid {uid}")]
    DuplicateRow { line: u64, uid: u64 },
    /// The rows do not describe a square adjacency map.
    #[error("adjacency rows are inconsistent: {0}")]
    Adjacency(#[from] AdjacencyError),
    /// A names line lacked the tab separating id and name.
    #[error("names line {line} must be `uid<TAB>name`")]
    InvalidNameLine { line: u64 },
    /// The CSV reader failed, including read errors from the underlying
    /// reader and records that are not valid UTF-8.
    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),
    /// Opening an input file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
