//! Pairwise dissimilarity between entities.
//!
//! Every unordered pair is scored with the Jaccard distance of the two
//! neighbour sets, then the triples are sorted so the forest builder can
//! consume them in ascending order with deterministic tie-breaks.

mod jaccard;
mod types;

pub use self::jaccard::{jaccard_distance, pairwise_distances};
pub use self::types::{DistanceTriple, EMPTY_UNION_DISTANCE};
