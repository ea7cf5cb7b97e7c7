//! Shared test utilities for `friendtree-core`.

use friendtree_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{AdjacencyMap, Uid};

/// Smallest graph generated by the property strategies.
const MIN_ENTITIES: usize = 2;
/// Largest graph generated by the property strategies.
const MAX_ENTITIES: usize = 12;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

pub(crate) fn uids(raw: &[u64]) -> Vec<Uid> {
    raw.iter().copied().map(Uid::new).collect()
}

pub(crate) fn graph(ids: &[u64], edges: &[(u64, u64)]) -> AdjacencyMap {
    AdjacencyMap::from_edges(
        uids(ids),
        edges
            .iter()
            .map(|&(left, right)| (Uid::new(left), Uid::new(right))),
    )
    .expect("fixture edges reference declared ids")
}

/// Two groups `{1, 2}` and `{3, 4}` where each member of one group is
/// connected to both members of the other. Within-group distances are `0`,
/// cross-group distances are `1`.
pub(crate) fn two_pairs() -> AdjacencyMap {
    graph(&[1, 2, 3, 4], &[(1, 3), (1, 4), (2, 3), (2, 4)])
}

/// Random graph over `MIN_ENTITIES..=MAX_ENTITIES` entities with ids spread
/// out so id order differs from insertion order.
pub(crate) fn random_graph_strategy() -> impl Strategy<Value = AdjacencyMap> {
    (MIN_ENTITIES..=MAX_ENTITIES, any::<u64>(), 0.05f64..0.9).prop_map(
        |(entities, seed, edge_probability)| seeded_graph(entities, seed, edge_probability),
    )
}

/// Generates a reproducible random graph.
pub(crate) fn seeded_graph(entities: usize, seed: u64, edge_probability: f64) -> AdjacencyMap {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ids: Vec<u64> = Vec::with_capacity(entities);
    while ids.len() < entities {
        let candidate = rng.gen_range(1..10_000);
        if !ids.contains(&candidate) {
            ids.push(candidate);
        }
    }

    let mut edges = Vec::new();
    for (index, &left) in ids.iter().enumerate() {
        for &right in ids.iter().skip(index + 1) {
            if rng.gen_bool(edge_probability) {
                edges.push((left, right));
            }
        }
    }
    graph(&ids, &edges)
}
