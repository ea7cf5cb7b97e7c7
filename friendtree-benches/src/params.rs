//! Benchmark parameter types.

use std::fmt;

/// Parameters for a synthetic graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of entities in the graph.
    pub entity_count: usize,
    /// Number of planted communities.
    pub community_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.entity_count, self.community_count)
    }
}
