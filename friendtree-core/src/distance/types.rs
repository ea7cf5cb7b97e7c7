//! Domain primitives shared by the distance routines.

use core::cmp::Ordering;

use crate::graph::Uid;

/// Distance reported for a pair whose neighbour sets are both empty.
///
/// Two isolated entities share nothing, so they are treated as maximally
/// dissimilar and never merged.
pub const EMPTY_UNION_DISTANCE: f64 = 1.0;

/// Jaccard distance between one unordered pair of entities.
///
/// The pair is stored canonically with the larger id first. Triples order
/// lexicographically on `(distance, first, second)`, which fixes the merge
/// sequence when several pairs tie on distance. The orientation also decides
/// which root survives a same-level unification and the order of children in
/// newly created nodes.
///
/// # Examples
/// ```
/// use friendtree_core::{DistanceTriple, Uid};
///
/// let triple = DistanceTriple::new(0.5, Uid::new(3), Uid::new(9));
/// assert_eq!(triple.first(), Uid::new(9));
/// assert_eq!(triple.second(), Uid::new(3));
///
/// let tie = DistanceTriple::new(0.5, Uid::new(1), Uid::new(7));
/// assert!(tie < triple);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DistanceTriple {
    distance: f64,
    first: Uid,
    second: Uid,
}

impl DistanceTriple {
    /// Creates a triple, orienting the pair so the larger id comes first.
    #[must_use]
    pub fn new(distance: f64, left: Uid, right: Uid) -> Self {
        let (first, second) = if left >= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            distance,
            first,
            second,
        }
    }

    /// Jaccard distance between the pair.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Larger id of the pair.
    #[must_use]
    pub const fn first(&self) -> Uid {
        self.first
    }

    /// Smaller id of the pair.
    #[must_use]
    pub const fn second(&self) -> Uid {
        self.second
    }
}

impl PartialEq for DistanceTriple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DistanceTriple {}

impl PartialOrd for DistanceTriple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceTriple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.first.cmp(&other.first))
            .then_with(|| self.second.cmp(&other.second))
    }
}
