//! Derived views over a finished cluster forest.
//!
//! [`TreeRenderer`] produces the nested bracketed text and
//! [`ReorderedMatrix`] writes the adjacency matrix permuted into the forest's
//! leaf order.

mod matrix;
mod tree;

use crate::{graph::Uid, hierarchy::NodeId};

pub use self::matrix::{DEFAULT_ROW_LABEL_WIDTH, LeafOrder, ReorderedMatrix};
pub use self::tree::TreeRenderer;

/// Errors raised while deriving the leaf order of a forest.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MatrixError {
    /// A leaf was reachable from more than one place in the forest.
    #[error("leaf {uid} appears more than once in the forest")]
    DuplicateLeaf {
        /// The repeated id.
        uid: Uid,
    },
    /// A child handle pointed outside the node arena.
    #[error("node {node} does not exist")]
    MissingNode {
        /// The dangling handle.
        node: NodeId,
    },
    /// A leaf id has no row in the adjacency map.
    #[error("leaf {uid} is not part of the adjacency map")]
    UnknownLeaf {
        /// The unknown id.
        uid: Uid,
    },
    /// The leaf order does not cover every entity of the adjacency map.
    #[error("leaf order covers {actual} of {expected} entities")]
    IncompleteOrder {
        /// Entities in the adjacency map.
        expected: usize,
        /// Leaves found in the forest.
        actual: usize,
    },
}
