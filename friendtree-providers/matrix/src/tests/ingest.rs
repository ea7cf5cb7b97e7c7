use friendtree_core::{AdjacencyError, NameLookup, Uid};
use rstest::rstest;

use super::MatrixSourceError;
use crate::ingest::{read_adjacency, read_names};

#[test]
fn parses_padded_labels_and_trailing_commas() {
    let csv = "Friend,10,20,30,\n              10,0,1,1,\n              20,1,0,0,\n30,1,0,0\n";
    let adjacency = read_adjacency(csv.as_bytes()).expect("well-formed matrix");

    assert_eq!(adjacency.len(), 3);
    assert!(adjacency.is_adjacent(Uid::new(10), Uid::new(20)));
    assert!(adjacency.is_adjacent(Uid::new(30), Uid::new(10)));
    assert!(!adjacency.is_adjacent(Uid::new(20), Uid::new(30)));
}

#[test]
fn blank_lines_are_skipped() {
    let csv = "\nFriend,1,2,\n\n1,0,1,\n2,1,0,\n\n";
    let adjacency = read_adjacency(csv.as_bytes()).expect("blank lines ignored");
    assert_eq!(adjacency.len(), 2);
}

#[test]
fn quoted_cells_and_byte_order_mark_are_accepted() {
    let csv = "\u{feff}Friend,\"1\",\"2\",\n\"1\",\"0\",\"1\",\n2,1,0,\n";
    let adjacency = read_adjacency(csv.as_bytes()).expect("quoted matrix parses");
    assert_eq!(adjacency.len(), 2);
    assert!(adjacency.is_adjacent(Uid::new(1), Uid::new(2)));
}

#[test]
fn header_line_is_reported_after_leading_blank_lines() {
    let err = read_adjacency("\n\nPerson,1,\n".as_bytes()).expect_err("header is wrong");
    assert_eq!(err.to_string(), "line 3 must start with `Friend`, found `Person`");
}

#[test]
fn invalid_utf8_is_a_csv_error() {
    let err = read_adjacency(&b"Friend,1,\n1,\xff,\n"[..]).expect_err("bytes are not utf-8");
    assert!(matches!(err, MatrixSourceError::Csv(_)));
}

#[rstest]
#[case::empty("", "adjacency input is empty")]
#[case::header("Person,1,\n1,0,\n", "line 1 must start with `Friend`, found `Person`")]
#[case::bad_header_uid("Friend,1,x,\n", "line 1: `x` is not a valid uid")]
#[case::bad_row_uid("Friend,1,\nabc,0,\n", "line 2: `abc` is not a valid uid")]
#[case::bad_cell("Friend,1,2,\n1,0,2,\n2,1,0,\n", "line 2, column 2: expected `0` or `1`, found `2`")]
#[case::short_row("Friend,1,2,\n1,0,\n", "line 2 has 1 cells but the header lists 2 ids")]
#[case::duplicate_column("Friend,1,1,\n", "header lists uid 1 more than once")]
#[case::duplicate_row("Friend,1,\n1,0,\n1,0,\n", "line 3 repeats the row for uid 1")]
fn malformed_matrices_are_rejected(#[case] csv: &str, #[case] message: &str) {
    let err = read_adjacency(csv.as_bytes()).expect_err("input must be rejected");
    assert_eq!(err.to_string(), message);
}

#[test]
fn rows_must_cover_the_header_ids() {
    let csv = "Friend,1,2,\n1,0,1,\n";
    let err = read_adjacency(csv.as_bytes()).expect_err("row 2 is missing");
    assert!(matches!(
        err,
        MatrixSourceError::Adjacency(AdjacencyError::UnknownCell { .. })
    ));
}

#[test]
fn header_without_rows_is_an_empty_graph() {
    let err = read_adjacency("Friend,\n".as_bytes()).expect_err("no entities");
    assert!(matches!(
        err,
        MatrixSourceError::Adjacency(AdjacencyError::EmptyGraph)
    ));
}

#[test]
fn names_skip_comments_and_keep_inner_spaces() {
    let tsv = "# uid\tname\n1\tAda Lovelace\n\n2\tGrace Hopper \n";
    let names = read_names(tsv.as_bytes()).expect("well-formed names");

    assert_eq!(names.len(), 2);
    assert_eq!(names.display_name(Uid::new(1)), Some("Ada Lovelace"));
    assert_eq!(names.display_name(Uid::new(2)), Some("Grace Hopper"));
}

#[rstest]
#[case::missing_tab("1 Ada\n", "names line 1 must be `uid<TAB>name`")]
#[case::extra_field("# header\n1\tAda\tLovelace\n", "names line 2 must be `uid<TAB>name`")]
#[case::bad_uid("\nada\tAda\n", "line 2: `ada` is not a valid uid")]
fn malformed_names_are_rejected(#[case] tsv: &str, #[case] message: &str) {
    let err = read_names(tsv.as_bytes()).expect_err("names must be rejected");
    assert_eq!(err.to_string(), message);
}
