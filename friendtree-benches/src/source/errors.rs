//! Error types for synthetic benchmark graph generation.

use friendtree_core::AdjacencyError;

/// Errors that may occur while preparing benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// The requested entity count was zero.
    #[error("entity count must be greater than zero")]
    ZeroEntities,
    /// The requested community count was zero.
    #[error("community count must be greater than zero")]
    ZeroCommunities,
    /// More communities than entities were requested.
    #[error("community count ({community_count}) must not exceed entity count ({entity_count})")]
    CommunityCountExceedsEntityCount {
        /// Number of communities requested.
        community_count: usize,
        /// Number of entities requested.
        entity_count: usize,
    },
    /// An edge probability was outside `[0, 1]`.
    #[error("edge probability `{parameter}` must lie in [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The generated edges did not form a valid adjacency map.
    #[error("generated graph is invalid: {0}")]
    Adjacency(#[from] AdjacencyError),
}
