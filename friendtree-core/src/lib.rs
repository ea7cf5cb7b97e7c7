//! Friendtree core library.
//!
//! Clusters a social graph by the Jaccard distance between neighbour sets and
//! renders the resulting dendrogram as nested text and as a tree-ordered
//! adjacency matrix.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod datasource;
mod distance;
mod error;
mod friendtree;
mod graph;
mod hierarchy;
mod render;
mod result;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_MERGE_CEILING, FriendTreeBuilder, MAX_ROW_LABEL_WIDTH},
    datasource::GraphSource,
    distance::{DistanceTriple, EMPTY_UNION_DISTANCE, jaccard_distance, pairwise_distances},
    error::{
        AdjacencyError, AdjacencyErrorCode, FriendTreeError, FriendTreeErrorCode,
        MatrixErrorCode, Result,
    },
    friendtree::FriendTree,
    graph::{AdjacencyMap, NameLookup, NameMap, Uid},
    hierarchy::{
        ClusterForest, ClusterNode, ForestError, ForestErrorCode, LEAF_LEVEL, MergeOutcome, NodeId,
    },
    render::{DEFAULT_ROW_LABEL_WIDTH, LeafOrder, MatrixError, ReorderedMatrix, TreeRenderer},
    result::Clustering,
};
