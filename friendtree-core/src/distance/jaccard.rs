//! Jaccard distance over neighbour sets.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use super::types::{DistanceTriple, EMPTY_UNION_DISTANCE};
use crate::graph::{AdjacencyMap, Uid};

/// Computes `1 - |a ∩ b| / |a ∪ b|` for two neighbour sets.
///
/// When both sets are empty the union is empty and the ratio is undefined;
/// [`EMPTY_UNION_DISTANCE`] is returned instead.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use friendtree_core::{Uid, jaccard_distance};
///
/// let a: BTreeSet<Uid> = [1, 2, 3].map(Uid::new).into();
/// let b: BTreeSet<Uid> = [2, 3, 4].map(Uid::new).into();
/// assert_eq!(jaccard_distance(&a, &b), 0.5);
/// assert_eq!(jaccard_distance(&BTreeSet::new(), &BTreeSet::new()), 1.0);
/// ```
#[must_use]
pub fn jaccard_distance(left: &BTreeSet<Uid>, right: &BTreeSet<Uid>) -> f64 {
    let shared = left.intersection(right).count();
    let union = left.len() + right.len() - shared;
    if union == 0 {
        return EMPTY_UNION_DISTANCE;
    }
    1.0 - shared as f64 / union as f64
}

/// Computes the distance for every unordered pair of entities, sorted by the
/// canonical triple order.
///
/// The result holds `n * (n - 1) / 2` triples; an entity is never paired with
/// itself.
///
/// # Examples
/// ```
/// use friendtree_core::{AdjacencyMap, Uid, pairwise_distances};
///
/// let graph = AdjacencyMap::from_edges(
///     [1, 2, 3].map(Uid::new),
///     [(Uid::new(1), Uid::new(3)), (Uid::new(2), Uid::new(3))],
/// )?;
/// let distances = pairwise_distances(&graph);
/// assert_eq!(distances.len(), 3);
/// // 1 and 2 both know only 3.
/// assert_eq!(distances[0].distance(), 0.0);
/// assert_eq!((distances[0].first(), distances[0].second()), (Uid::new(2), Uid::new(1)));
/// # Ok::<(), friendtree_core::AdjacencyError>(())
/// ```
#[instrument(name = "core.distances", skip(adjacency), fields(entities = adjacency.len()))]
pub fn pairwise_distances(adjacency: &AdjacencyMap) -> Vec<DistanceTriple> {
    let rows: Vec<(Uid, BTreeSet<Uid>)> = adjacency
        .uids()
        .map(|uid| (uid, adjacency.neighbors(uid)))
        .collect();

    let pair_count = rows.len().saturating_mul(rows.len().saturating_sub(1)) / 2;
    let mut triples = Vec::with_capacity(pair_count);
    for (index, (left, left_neighbors)) in rows.iter().enumerate() {
        for (right, right_neighbors) in rows.iter().skip(index + 1) {
            let distance = jaccard_distance(left_neighbors, right_neighbors);
            triples.push(DistanceTriple::new(distance, *left, *right));
        }
    }
    debug!(pairs = triples.len(), "computed jaccard distances");

    triples.sort_unstable();
    debug!("sorted jaccard distances");
    triples
}
