//! Graph provider reading adjacency matrices and display names from text.
//!
//! The adjacency file uses the same layout the CLI writes: a `Friend,`
//! header listing every id, then one row per id holding `0`/`1` cells. The
//! optional names file holds one `uid<TAB>name` pair per line.

mod errors;
mod ingest;
mod source;

pub use errors::MatrixSourceError;
pub use source::MatrixSource;

#[cfg(test)]
mod tests;
