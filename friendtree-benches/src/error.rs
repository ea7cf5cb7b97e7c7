//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of panicking inside
//! Criterion closures.

use crate::source::SyntheticError;
use friendtree_core::{ForestError, FriendTreeError, MatrixError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Pipeline configuration or execution failed.
    #[error("friendtree run failed: {0}")]
    FriendTree(#[from] FriendTreeError),
    /// Forest construction failed.
    #[error("forest construction failed: {0}")]
    Forest(#[from] ForestError),
    /// Leaf ordering failed.
    #[error("matrix reordering failed: {0}")]
    Matrix(#[from] MatrixError),
}
