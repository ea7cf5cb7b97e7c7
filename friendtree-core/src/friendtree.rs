//! Clustering orchestration for the friendtree library.
//!
//! Provides the [`FriendTree`] entry point that runs the distance and
//! dendrogram stages against a [`GraphSource`] and wraps stage failures with
//! the source name.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    Result,
    datasource::GraphSource,
    distance::pairwise_distances,
    error::FriendTreeError,
    hierarchy::ClusterForest,
    result::Clustering,
};

/// Entry point for running the clustering pipeline.
///
/// # Examples
/// ```
/// use friendtree_core::{AdjacencyMap, FriendTreeBuilder, GraphSource, NameMap, Uid};
///
/// struct Fixture(AdjacencyMap, NameMap);
///
/// impl GraphSource for Fixture {
///     fn name(&self) -> &str { "fixture" }
///     fn adjacency(&self) -> &AdjacencyMap { &self.0 }
///     fn names(&self) -> &NameMap { &self.1 }
/// }
///
/// let edges = [(1, 3), (1, 4), (2, 3), (2, 4)].map(|(a, b)| (Uid::new(a), Uid::new(b)));
/// let graph = AdjacencyMap::from_edges([1, 2, 3, 4].map(Uid::new), edges)?;
/// let source = Fixture(graph, NameMap::default());
///
/// let clustering = FriendTreeBuilder::new().build()?.run(&source)?;
/// assert_eq!(clustering.root_count(), 2);
/// assert_eq!(
///     clustering.tree(source.names()).to_string(),
///     "(\n 1,\n 2\n):0\n(\n 3,\n 4\n):0\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FriendTree {
    merge_ceiling: f64,
    row_label_width: usize,
}

impl FriendTree {
    pub(crate) fn new(merge_ceiling: f64, row_label_width: usize) -> Self {
        Self {
            merge_ceiling,
            row_label_width,
        }
    }

    /// Returns the distance at which merging stops.
    #[must_use]
    pub fn merge_ceiling(&self) -> f64 {
        self.merge_ceiling
    }

    /// Returns the width of the matrix row labels.
    #[must_use]
    pub fn row_label_width(&self) -> usize {
        self.row_label_width
    }

    /// Computes pairwise distances for `source` and builds its dendrogram.
    ///
    /// # Errors
    /// Returns [`FriendTreeError::Forest`] when the forest cannot be built or
    /// its partition invariant fails.
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            entities = source.entity_count(),
            merge_ceiling = self.merge_ceiling,
        ),
    )]
    pub fn run<S: GraphSource + ?Sized>(&self, source: &S) -> Result<Clustering> {
        let adjacency = source.adjacency();
        info!(entities = adjacency.len(), "computing pairwise distances");
        let distances = pairwise_distances(adjacency);
        info!(pairs = distances.len(), "distances sorted, clustering");

        let forest = ClusterForest::build(adjacency.uids(), &distances, self.merge_ceiling)
            .map_err(|error| FriendTreeError::Forest {
                data_source: Arc::from(source.name()),
                error,
            })?;
        Ok(Clustering::new(forest, distances.len(), self.row_label_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FriendTreeBuilder,
        graph::{AdjacencyMap, NameMap, Uid},
        test_utils::{seeded_graph, two_pairs},
    };

    struct Fixture {
        graph: AdjacencyMap,
        names: NameMap,
    }

    impl GraphSource for Fixture {
        fn name(&self) -> &str {
            "fixture"
        }

        fn adjacency(&self) -> &AdjacencyMap {
            &self.graph
        }

        fn names(&self) -> &NameMap {
            &self.names
        }
    }

    fn fixture(graph: AdjacencyMap) -> Fixture {
        Fixture {
            graph,
            names: NameMap::default(),
        }
    }

    #[test]
    fn run_reports_summary_counters() {
        let source = fixture(two_pairs());
        let clustering = FriendTreeBuilder::new()
            .build()
            .expect("default configuration is valid")
            .run(&source)
            .expect("run succeeds");

        assert_eq!(clustering.entity_count(), 4);
        assert_eq!(clustering.distance_pairs(), 6);
        assert_eq!(clustering.pairs_considered(), 2);
        assert_eq!(clustering.merges_applied(), 2);
        assert_eq!(clustering.root_count(), 2);
    }

    #[test]
    fn lower_ceiling_leaves_more_roots() {
        let source = fixture(seeded_graph(12, 3, 0.4));
        let run = |ceiling| {
            FriendTreeBuilder::new()
                .with_merge_ceiling(ceiling)
                .build()
                .expect("ceiling is valid")
                .run(&source)
                .expect("run succeeds")
                .root_count()
        };
        assert!(run(0.2) >= run(1.0));
    }

    #[test]
    fn names_label_leaves() {
        let mut source = fixture(two_pairs());
        source.names.insert(Uid::new(1), "Ada");
        let clustering = FriendTreeBuilder::new()
            .build()
            .expect("valid")
            .run(&source)
            .expect("run succeeds");
        let text = clustering.tree(source.names()).to_string();
        assert!(text.starts_with("(\n Ada,\n 2\n):0\n"));
    }
}
