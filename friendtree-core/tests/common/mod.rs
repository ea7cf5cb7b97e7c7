use friendtree_core::{AdjacencyError, AdjacencyMap, GraphSource, NameMap, Uid};

/// In-memory graph source assembled from an edge list.
#[derive(Clone)]
pub struct Fixture {
    graph: AdjacencyMap,
    names: NameMap,
}

impl Fixture {
    pub fn from_edges(ids: &[u64], edges: &[(u64, u64)]) -> Result<Self, AdjacencyError> {
        let graph = AdjacencyMap::from_edges(
            ids.iter().copied().map(Uid::new),
            edges
                .iter()
                .map(|&(left, right)| (Uid::new(left), Uid::new(right))),
        )?;
        Ok(Self {
            graph,
            names: NameMap::default(),
        })
    }

    #[must_use]
    pub fn with_name(mut self, uid: u64, name: &str) -> Self {
        self.names.insert(Uid::new(uid), name);
        self
    }
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

/// `N(1) = N(2) = {3, 4}` and `N(3) = N(4) = {1, 2}`.
pub fn two_pairs() -> Fixture {
    Fixture::from_edges(&[1, 2, 3, 4], &[(1, 3), (1, 4), (2, 3), (2, 4)])
        .expect("fixture edges reference declared ids")
}
