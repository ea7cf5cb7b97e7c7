use friendtree_core::{FriendTreeBuilder, GraphSource};
use rstest::rstest;

use super::{PlantedCommunityConfig, PlantedCommunitySource, SyntheticError};

fn config(entity_count: usize, community_count: usize) -> PlantedCommunityConfig {
    PlantedCommunityConfig {
        entity_count,
        community_count,
        intra_probability: 0.8,
        inter_probability: 0.02,
        seed: 7,
    }
}

#[test]
fn generation_is_reproducible() {
    let first = PlantedCommunitySource::generate(&config(40, 4)).expect("valid config");
    let second = PlantedCommunitySource::generate(&config(40, 4)).expect("valid config");
    assert_eq!(first.adjacency(), second.adjacency());
    assert_eq!(first.entity_count(), 40);
    assert_eq!(first.name(), "planted-n40-k4-s7");
}

#[test]
fn certain_edges_connect_every_community_member() {
    let mut dense = config(12, 3);
    dense.intra_probability = 1.0;
    dense.inter_probability = 0.0;
    let source = PlantedCommunitySource::generate(&dense).expect("valid config");

    let clustering = FriendTreeBuilder::new()
        .build()
        .expect("defaults valid")
        .run(&source)
        .expect("run succeeds");
    assert_eq!(clustering.root_count(), 3);
}

#[rstest]
#[case::zero_entities(config(0, 1), "entity count must be greater than zero")]
#[case::zero_communities(config(5, 0), "community count must be greater than zero")]
#[case::too_many_communities(
    config(2, 3),
    "community count (3) must not exceed entity count (2)"
)]
fn invalid_counts_are_rejected(#[case] input: PlantedCommunityConfig, #[case] message: &str) {
    let err = PlantedCommunitySource::generate(&input).expect_err("config must be rejected");
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case(-0.1)]
#[case(1.5)]
#[case(f64::NAN)]
fn invalid_probabilities_are_rejected(#[case] probability: f64) {
    let mut input = config(10, 2);
    input.inter_probability = probability;
    let err = PlantedCommunitySource::generate(&input).expect_err("probability must be rejected");
    assert!(matches!(
        err,
        SyntheticError::InvalidProbability {
            parameter: "inter_probability",
            ..
        }
    ));
}
