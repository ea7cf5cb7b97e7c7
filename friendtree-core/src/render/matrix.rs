//! Tree-ordered adjacency matrix output.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use tracing::{debug, instrument};

use super::MatrixError;
use crate::{
    graph::{AdjacencyMap, Uid},
    hierarchy::{ClusterForest, NodeId},
};

/// Default width, in characters, of the right-aligned row labels.
pub const DEFAULT_ROW_LABEL_WIDTH: usize = 16;

/// Pre-order leaf sequence of a forest.
///
/// Roots are visited in document order and children in stored order. The
/// running index carries over from one root to the next, so the leaves of
/// separate roots occupy disjoint, consecutive position ranges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeafOrder {
    order: Vec<Uid>,
    positions: BTreeMap<Uid, usize>,
}

impl LeafOrder {
    /// Walks every root of `forest` and records its leaves.
    ///
    /// # Errors
    /// Returns [`MatrixError::DuplicateLeaf`] when a uid is reachable twice
    /// and [`MatrixError::MissingNode`] when a child handle is dangling.
    pub fn from_forest(forest: &ClusterForest) -> Result<Self, MatrixError> {
        let mut order = Self::default();
        let mut next = 0;
        for root in forest.roots() {
            next = order.place(forest, root, next)?;
        }
        Ok(order)
    }

    fn place(&mut self, forest: &ClusterForest, id: NodeId, next: usize) -> Result<usize, MatrixError> {
        let node = forest.node(id).ok_or(MatrixError::MissingNode { node: id })?;
        if let Some(uid) = node.uid() {
            if self.positions.insert(uid, next).is_some() {
                return Err(MatrixError::DuplicateLeaf { uid });
            }
            self.order.push(uid);
            return Ok(next + 1);
        }

        let mut cursor = next;
        for &child in node.children() {
            cursor = self.place(forest, child, cursor)?;
        }
        Ok(cursor)
    }

    /// Leaf ids in output order.
    #[must_use]
    pub fn uids(&self) -> &[Uid] {
        &self.order
    }

    /// Position of `uid` in the order, if it is a leaf of the forest.
    #[must_use]
    pub fn position(&self, uid: Uid) -> Option<usize> {
        self.positions.get(&uid).copied()
    }

    /// Number of leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the order holds no leaves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The input adjacency matrix with rows and columns permuted into leaf order.
///
/// Cells are read straight from the [`AdjacencyMap`]; nothing is recomputed.
///
/// # Examples
/// ```
/// use friendtree_core::{AdjacencyMap, ClusterForest, ReorderedMatrix, Uid, pairwise_distances};
///
/// let ids = [1, 2, 3].map(Uid::new);
/// let adjacency = AdjacencyMap::from_edges(ids, [(Uid::new(1), Uid::new(3)), (Uid::new(2), Uid::new(3))])?;
/// let forest = ClusterForest::build(adjacency.uids(), &pairwise_distances(&adjacency), 1.0)?;
/// let matrix = ReorderedMatrix::new(&forest, &adjacency, 2)?;
///
/// let mut csv = Vec::new();
/// matrix.write_csv(&mut csv)?;
/// assert_eq!(
///     String::from_utf8(csv)?,
///     "Friend,3,1,2,\n 3,0,1,1,\n 1,1,0,0,\n 2,1,0,0,\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ReorderedMatrix<'a> {
    adjacency: &'a AdjacencyMap,
    order: LeafOrder,
    row_label_width: usize,
}

impl<'a> ReorderedMatrix<'a> {
    /// Derives the leaf order of `forest` and pairs it with `adjacency`.
    ///
    /// # Errors
    /// Returns [`MatrixError`] when the leaf order is inconsistent or does not
    /// cover exactly the entities of `adjacency`.
    #[instrument(
        name = "core.matrix",
        err,
        skip(forest, adjacency),
        fields(entities = adjacency.len()),
    )]
    pub fn new(
        forest: &ClusterForest,
        adjacency: &'a AdjacencyMap,
        row_label_width: usize,
    ) -> Result<Self, MatrixError> {
        let order = LeafOrder::from_forest(forest)?;
        if let Some(&uid) = order.uids().iter().find(|&&uid| !adjacency.contains(uid)) {
            return Err(MatrixError::UnknownLeaf { uid });
        }
        if order.len() != adjacency.len() {
            return Err(MatrixError::IncompleteOrder {
                expected: adjacency.len(),
                actual: order.len(),
            });
        }
        debug!(leaves = order.len(), "leaf order computed");
        Ok(Self {
            adjacency,
            order,
            row_label_width,
        })
    }

    /// The leaf order used for both rows and columns.
    #[must_use]
    pub const fn order(&self) -> &LeafOrder {
        &self.order
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the matrix is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cell at reordered position `(row, column)`.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        let uids = self.order.uids();
        let (&row, &column) = (uids.get(row)?, uids.get(column)?);
        Some(self.adjacency.is_adjacent(row, column))
    }

    /// Writes the matrix as comma-terminated CSV.
    ///
    /// The header is `Friend,` followed by each ordered id and a comma. Each
    /// row starts with its id right-aligned to the configured label width,
    /// then one `1,` or `0,` per column.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let uids = self.order.uids();
        writer.write_all(b"Friend,")?;
        for uid in uids {
            write!(writer, "{uid},")?;
        }
        writer.write_all(b"\n")?;

        let width = self.row_label_width;
        for &row in uids {
            write!(writer, "{row:>width$},")?;
            for &column in uids {
                let cell: &[u8] = if self.adjacency.is_adjacent(row, column) {
                    b"1,"
                } else {
                    b"0,"
                };
                writer.write_all(cell)?;
            }
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::distance::{DistanceTriple, pairwise_distances};
    use crate::test_utils::{graph, seeded_graph, two_pairs, uids};

    fn cluster(adjacency: &AdjacencyMap) -> ClusterForest {
        ClusterForest::build(adjacency.uids(), &pairwise_distances(adjacency), 1.0)
            .expect("clustering must succeed")
    }

    fn csv(matrix: &ReorderedMatrix<'_>) -> String {
        let mut buffer = Vec::new();
        matrix.write_csv(&mut buffer).expect("write to vec");
        String::from_utf8(buffer).expect("csv is utf-8")
    }

    #[test]
    fn leaf_index_carries_across_roots() {
        let forest = cluster(&two_pairs());
        let order = LeafOrder::from_forest(&forest).expect("order");

        assert_eq!(order.uids(), uids(&[1, 2, 3, 4]).as_slice());
        for (index, &uid) in order.uids().iter().enumerate() {
            assert_eq!(order.position(uid), Some(index));
        }
    }

    #[test]
    fn two_pairs_matrix_only_marks_cross_group_edges() {
        let adjacency = two_pairs();
        let forest = cluster(&adjacency);
        let matrix = ReorderedMatrix::new(&forest, &adjacency, 1).expect("matrix");

        let expected = "Friend,1,2,3,4,\n\
                        1,0,0,1,1,\n\
                        2,0,0,1,1,\n\
                        3,1,1,0,0,\n\
                        4,1,1,0,0,\n";
        assert_eq!(csv(&matrix), expected);
    }

    #[rstest]
    #[case::default_width(DEFAULT_ROW_LABEL_WIDTH, "              42,0,\n")]
    #[case::narrow(4, "  42,0,\n")]
    #[case::narrower_than_id(1, "42,0,\n")]
    fn row_labels_are_right_aligned(#[case] width: usize, #[case] expected_row: &str) {
        let adjacency = graph(&[42], &[]);
        let forest = cluster(&adjacency);
        let matrix = ReorderedMatrix::new(&forest, &adjacency, width).expect("matrix");
        assert_eq!(csv(&matrix), format!("Friend,42,\n{expected_row}"));
    }

    #[test]
    fn cells_are_a_permutation_of_the_input() {
        let adjacency = seeded_graph(12, 99, 0.35);
        let forest = cluster(&adjacency);
        let matrix = ReorderedMatrix::new(&forest, &adjacency, 8).expect("matrix");
        let order = matrix.order().uids();

        for (row, &row_uid) in order.iter().enumerate() {
            for (column, &column_uid) in order.iter().enumerate() {
                assert_eq!(
                    matrix.cell(row, column),
                    Some(adjacency.is_adjacent(row_uid, column_uid))
                );
            }
        }
        assert_eq!(matrix.cell(order.len(), 0), None);
    }

    #[test]
    fn order_must_cover_the_adjacency_map() {
        let adjacency = two_pairs();
        let forest = ClusterForest::build(
            uids(&[1, 2, 3]),
            &[DistanceTriple::new(0.0, Uid::new(1), Uid::new(2))],
            1.0,
        )
        .expect("build");
        let err = ReorderedMatrix::new(&forest, &adjacency, 4).expect_err("order is incomplete");
        assert_eq!(
            err,
            MatrixError::IncompleteOrder {
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn leaves_outside_the_adjacency_map_are_rejected() {
        let adjacency = graph(&[1, 2], &[(1, 2)]);
        let forest = ClusterForest::new(uids(&[1, 7])).expect("forest");
        let err = ReorderedMatrix::new(&forest, &adjacency, 4).expect_err("leaf 7 is unknown");
        assert_eq!(err, MatrixError::UnknownLeaf { uid: Uid::new(7) });
        assert_eq!(err.code().as_str(), "MATRIX_UNKNOWN_LEAF");
    }
}
