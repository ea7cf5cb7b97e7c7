//! Synthetic social graphs with planted communities.

mod errors;

pub use errors::SyntheticError;

use friendtree_core::{AdjacencyMap, GraphSource, NameMap, Uid};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// First id handed out to generated entities.
const FIRST_UID: u64 = 100_000;

/// Configuration for a planted-community graph.
///
/// Entity `i` belongs to community `i % community_count`. Each pair inside a
/// community is connected with `intra_probability`, every other pair with
/// `inter_probability`.
#[derive(Clone, Debug)]
pub struct PlantedCommunityConfig {
    /// Number of entities to generate.
    pub entity_count: usize,
    /// Number of communities.
    pub community_count: usize,
    /// Edge probability within a community.
    pub intra_probability: f64,
    /// Edge probability across communities.
    pub inter_probability: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A synthetic [`GraphSource`] without display names.
#[derive(Clone, Debug)]
pub struct PlantedCommunitySource {
    name: String,
    adjacency: AdjacencyMap,
    names: NameMap,
}

impl PlantedCommunitySource {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the counts are zero or inconsistent or
    /// a probability lies outside `[0, 1]`.
    pub fn generate(config: &PlantedCommunityConfig) -> Result<Self, SyntheticError> {
        validate(config)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let uids: Vec<Uid> = (0..config.entity_count)
            .map(|index| Uid::new(FIRST_UID + index as u64))
            .collect();

        let mut edges = Vec::new();
        for (left_index, &left) in uids.iter().enumerate() {
            for (right_index, &right) in uids.iter().enumerate().skip(left_index + 1) {
                let same_community = left_index % config.community_count
                    == right_index % config.community_count;
                let probability = if same_community {
                    config.intra_probability
                } else {
                    config.inter_probability
                };
                if rng.gen_bool(probability) {
                    edges.push((left, right));
                }
            }
        }

        Ok(Self {
            name: format!(
                "planted-n{}-k{}-s{}",
                config.entity_count, config.community_count, config.seed
            ),
            adjacency: AdjacencyMap::from_edges(uids, edges)?,
            names: NameMap::default(),
        })
    }
}

fn validate(config: &PlantedCommunityConfig) -> Result<(), SyntheticError> {
    if config.entity_count == 0 {
        return Err(SyntheticError::ZeroEntities);
    }
    if config.community_count == 0 {
        return Err(SyntheticError::ZeroCommunities);
    }
    if config.community_count > config.entity_count {
        return Err(SyntheticError::CommunityCountExceedsEntityCount {
            community_count: config.community_count,
            entity_count: config.entity_count,
        });
    }
    for (parameter, value) in [
        ("intra_probability", config.intra_probability),
        ("inter_probability", config.inter_probability),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SyntheticError::InvalidProbability { parameter, value });
        }
    }
    Ok(())
}

impl GraphSource for PlantedCommunitySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    fn names(&self) -> &NameMap {
        &self.names
    }
}

#[cfg(test)]
mod tests;
