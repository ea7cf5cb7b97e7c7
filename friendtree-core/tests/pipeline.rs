//! End-to-end tests for the `FriendTree` pipeline and its derived views.

mod common;

use common::{Fixture, two_pairs};
use friendtree_core::{
    ClusterForest, DistanceTriple, FriendTreeBuilder, FriendTreeError, FriendTreeErrorCode,
    GraphSource, LEAF_LEVEL, NameMap, Uid,
};
use rstest::{fixture, rstest};

#[fixture]
fn source() -> Fixture {
    two_pairs()
}

fn csv(clustering: &friendtree_core::Clustering, source: &Fixture) -> String {
    let mut buffer = Vec::new();
    clustering
        .matrix(source.adjacency())
        .expect("leaf order covers the graph")
        .write_csv(&mut buffer)
        .expect("write to vec");
    String::from_utf8(buffer).expect("csv is utf-8")
}

#[rstest]
fn disconnected_groups_render_as_two_roots(source: Fixture) {
    let clustering = FriendTreeBuilder::new()
        .build()
        .expect("defaults valid")
        .run(&source)
        .expect("run must succeed");

    assert_eq!(clustering.root_count(), 2);
    assert_eq!(
        clustering.tree(source.names()).to_string(),
        "(\n 1,\n 2\n):0\n(\n 3,\n 4\n):0\n"
    );

    let label = |id: u64| format!("{id:>16},");
    let expected = [
        "Friend,1,2,3,4,".to_owned(),
        format!("{}0,0,1,1,", label(1)),
        format!("{}0,0,1,1,", label(2)),
        format!("{}1,1,0,0,", label(3)),
        format!("{}1,1,0,0,", label(4)),
    ]
    .map(|line| line + "\n")
    .concat();
    assert_eq!(csv(&clustering, &source), expected);
}

#[rstest]
fn display_names_replace_raw_ids(source: Fixture) {
    let source = source.with_name(2, "Grace").with_name(3, "Alan");
    let clustering = FriendTreeBuilder::new()
        .build()
        .expect("defaults valid")
        .run(&source)
        .expect("run must succeed");
    assert_eq!(
        clustering.tree(source.names()).to_string(),
        "(\n 1,\n Grace\n):0\n(\n Alan,\n 4\n):0\n"
    );
}

#[test]
fn three_way_tie_flattens_into_one_node() {
    let ids = [1, 2, 3].map(Uid::new);
    let distances = [
        DistanceTriple::new(0.3, ids[0], ids[1]),
        DistanceTriple::new(0.3, ids[0], ids[2]),
        DistanceTriple::new(0.3, ids[1], ids[2]),
    ];
    let forest = ClusterForest::build(ids, &distances, 1.0).expect("build succeeds");
    let text = friendtree_core::TreeRenderer::new(&forest, &NameMap::default()).to_string();
    assert_eq!(text, "(\n 3,\n 1,\n 2\n):0.3\n");
}

#[test]
fn entities_without_shared_neighbours_stay_apart() {
    let source = Fixture::from_edges(&[5, 6, 7], &[]).expect("fixture");
    let clustering = FriendTreeBuilder::new()
        .build()
        .expect("defaults valid")
        .run(&source)
        .expect("run must succeed");

    assert_eq!(clustering.root_count(), 3);
    assert_eq!(clustering.merges_applied(), 0);
    assert!(clustering.forest().roots().all(|id| {
        clustering
            .forest()
            .node(id)
            .is_some_and(|node| node.level() == LEAF_LEVEL)
    }));
    assert_eq!(clustering.tree(source.names()).to_string(), "5\n6\n7\n");
}

#[test]
fn repeated_runs_are_identical() {
    let edges = [
        (1, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (4, 5),
        (4, 6),
        (5, 6),
        (6, 7),
        (7, 8),
        (8, 9),
        (7, 9),
    ];
    let source = Fixture::from_edges(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &edges).expect("fixture");
    let tree = FriendTreeBuilder::new().build().expect("defaults valid");

    let first = tree.run(&source).expect("first run");
    let second = tree.run(&source).expect("second run");
    assert_eq!(
        first.tree(source.names()).to_string(),
        second.tree(source.names()).to_string()
    );
    assert_eq!(csv(&first, &source), csv(&second, &source));
    assert_eq!(
        first.leaf_order().expect("order").uids().len(),
        source.entity_count()
    );
}

#[test]
fn invalid_configuration_is_rejected_before_running() {
    let err = FriendTreeBuilder::new()
        .with_merge_ceiling(1.25)
        .build()
        .expect_err("ceiling above one is invalid");
    assert_eq!(err.code(), FriendTreeErrorCode::InvalidMergeCeiling);
    assert!(matches!(err, FriendTreeError::InvalidMergeCeiling { got } if got == 1.25));
}
