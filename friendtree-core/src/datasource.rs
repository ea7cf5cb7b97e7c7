//! Graph source abstraction for the friendtree core runtime.
//!
//! Acquiring the social graph (from a network service, a file or a fixture)
//! is the job of external providers. The core only consumes the materialised
//! adjacency relation and the display-name lookup through this trait.

use crate::graph::{AdjacencyMap, NameMap};

/// A materialised social graph ready for clustering.
///
/// # Examples
/// ```
/// use friendtree_core::{AdjacencyMap, GraphSource, NameMap, Uid};
///
/// struct Fixture {
///     graph: AdjacencyMap,
///     names: NameMap,
/// }
///
/// impl GraphSource for Fixture {
///     fn name(&self) -> &str { "fixture" }
///     fn adjacency(&self) -> &AdjacencyMap { &self.graph }
///     fn names(&self) -> &NameMap { &self.names }
/// }
///
/// let graph = AdjacencyMap::from_edges([1, 2].map(Uid::new), [(Uid::new(1), Uid::new(2))])?;
/// let source = Fixture { graph, names: NameMap::default() };
/// assert_eq!(source.entity_count(), 2);
/// # Ok::<(), friendtree_core::AdjacencyError>(())
/// ```
pub trait GraphSource {
    /// Returns a human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Returns the validated adjacency relation.
    fn adjacency(&self) -> &AdjacencyMap;

    /// Returns the partial display-name lookup.
    fn names(&self) -> &NameMap;

    /// Number of entities in the graph.
    #[must_use]
    fn entity_count(&self) -> usize {
        self.adjacency().len()
    }
}
