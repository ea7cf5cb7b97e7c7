//! Result types for clustering runs.
//!
//! [`Clustering`] owns the finished forest and hands out the derived views.

use crate::{
    Result,
    graph::{AdjacencyMap, NameLookup},
    hierarchy::ClusterForest,
    render::{LeafOrder, ReorderedMatrix, TreeRenderer},
};

/// Represents the output of a [`crate::FriendTree::run`] invocation.
#[derive(Debug, Clone)]
pub struct Clustering {
    forest: ClusterForest,
    distance_pairs: usize,
    row_label_width: usize,
}

impl Clustering {
    pub(crate) fn new(forest: ClusterForest, distance_pairs: usize, row_label_width: usize) -> Self {
        Self {
            forest,
            distance_pairs,
            row_label_width,
        }
    }

    /// The finished forest.
    #[must_use]
    pub fn forest(&self) -> &ClusterForest {
        &self.forest
    }

    /// Consumes the result and returns the forest.
    #[must_use]
    pub fn into_forest(self) -> ClusterForest {
        self.forest
    }

    /// Number of clustered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.forest.entity_count()
    }

    /// Number of distance triples computed.
    #[must_use]
    pub fn distance_pairs(&self) -> usize {
        self.distance_pairs
    }

    /// Number of triples applied before the merge ceiling was reached.
    #[must_use]
    pub fn pairs_considered(&self) -> usize {
        self.forest.pairs_considered()
    }

    /// Number of triples that changed the root set.
    #[must_use]
    pub fn merges_applied(&self) -> usize {
        self.forest.merges_applied()
    }

    /// Number of roots left in the forest.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.forest.root_count()
    }

    /// Bracketed text view labelled through `names`.
    #[must_use]
    pub fn tree<'a, N: NameLookup + ?Sized>(&'a self, names: &'a N) -> TreeRenderer<'a, N> {
        TreeRenderer::new(&self.forest, names)
    }

    /// Pre-order leaf sequence across all roots.
    ///
    /// # Errors
    /// Returns [`crate::FriendTreeError::Matrix`] when the forest is
    /// inconsistent.
    pub fn leaf_order(&self) -> Result<LeafOrder> {
        Ok(LeafOrder::from_forest(&self.forest)?)
    }

    /// The input adjacency matrix permuted into leaf order.
    ///
    /// # Errors
    /// Returns [`crate::FriendTreeError::Matrix`] when the leaves do not match
    /// the entities of `adjacency`.
    pub fn matrix<'a>(&self, adjacency: &'a AdjacencyMap) -> Result<ReorderedMatrix<'a>> {
        Ok(ReorderedMatrix::new(
            &self.forest,
            adjacency,
            self.row_label_width,
        )?)
    }
}
