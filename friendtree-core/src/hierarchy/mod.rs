//! Similarity dendrogram construction.
//!
//! The forest consumes the sorted Jaccard distance list and merges entities
//! bottom-up. Merges at the same distance collapse into a single multi-child
//! node, so each internal node corresponds to one distinct distance value.
//!
//! The merge step is inherently sequential: each outcome depends on the
//! levels left behind by every earlier step.

mod forest;
mod node;

use crate::graph::Uid;

pub use crate::error::ForestErrorCode;

pub use self::forest::{ClusterForest, MergeOutcome};
pub use self::node::{ClusterNode, LEAF_LEVEL, NodeId};

/// Errors returned while building or validating a [`ClusterForest`].
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum ForestError {
    /// A forest needs at least one entity.
    #[error("cannot build a cluster forest without entities")]
    EmptyForest,
    /// The same uid was supplied twice.
    #[error("uid {uid} appears more than once")]
    DuplicateUid {
        /// The repeated id.
        uid: Uid,
    },
    /// A distance triple named an id the forest does not contain.
    #[error("uid {uid} is not part of the forest")]
    UnknownUid {
        /// The unknown id.
        uid: Uid,
    },
    /// A distance lay outside `[0, 1]` or was not a number.
    #[error("invalid distance {distance} for pair ({first}, {second})")]
    InvalidDistance {
        /// Larger id of the offending pair.
        first: Uid,
        /// Smaller id of the offending pair.
        second: Uid,
        /// The rejected distance.
        distance: f64,
    },
    /// A triple arrived below the level of a root it touches, meaning the
    /// input was not sorted in ascending order.
    #[error("distance {distance} is below existing root level {level}; input must be ascending")]
    DescendingDistance {
        /// The distance being applied.
        distance: f64,
        /// The root level that exceeded it.
        level: f64,
    },
    /// The uid index resolved to a node that is no longer a live root.
    #[error("uid {uid} resolves to node {node}, which is not a live root")]
    RetiredRoot {
        /// The id being resolved.
        uid: Uid,
        /// The stale handle.
        node: NodeId,
    },
    /// A handle pointed outside the node arena.
    #[error("node {node} does not exist")]
    MissingNode {
        /// The dangling handle.
        node: NodeId,
    },
    /// The roots no longer partition the entity set.
    #[error("roots do not partition the entity set at uid {uid}")]
    PartitionViolation {
        /// First id found duplicated, misindexed or missing.
        uid: Uid,
    },
}

impl ForestError {
    /// Whether the error signals a broken internal invariant rather than bad
    /// input. Such errors have no recovery path.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::RetiredRoot { .. } | Self::MissingNode { .. } | Self::PartitionViolation { .. }
        )
    }
}
