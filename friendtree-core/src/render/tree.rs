//! Nested bracketed text rendering of a cluster forest.

use std::{
    fmt,
    io::{self, Write},
};

use crate::{
    graph::NameLookup,
    hierarchy::{ClusterForest, NodeId},
};

/// Renders each forest root as a bracketed expression.
///
/// Leaves print the entity's display name, or its raw id when the lookup has
/// no entry. Internal nodes print as
///
/// ```text
/// (
///  child,
///  child
/// ):level
/// ```
///
/// where every nesting level adds one leading space and `level` uses the
/// shortest representation that round-trips the `f64` (`0`, `0.3`,
/// `0.6666666666666667`). Each root is followed by a newline.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use friendtree_core::{ClusterForest, DistanceTriple, TreeRenderer, Uid};
///
/// let forest = ClusterForest::build(
///     [1, 2].map(Uid::new),
///     &[DistanceTriple::new(0.5, Uid::new(1), Uid::new(2))],
///     1.0,
/// )?;
/// let names = BTreeMap::from([(Uid::new(1), "Ada".to_owned())]);
/// let text = TreeRenderer::new(&forest, &names).to_string();
/// assert_eq!(text, "(\n Ada,\n 2\n):0.5\n");
/// # Ok::<(), friendtree_core::ForestError>(())
/// ```
pub struct TreeRenderer<'a, N: ?Sized> {
    forest: &'a ClusterForest,
    names: &'a N,
}

impl<'a, N: NameLookup + ?Sized> TreeRenderer<'a, N> {
    /// Creates a renderer over `forest` using `names` for leaf labels.
    #[must_use]
    pub const fn new(forest: &'a ClusterForest, names: &'a N) -> Self {
        Self { forest, names }
    }

    /// Streams the rendered forest to `writer`, one node at a time.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`, or
    /// [`io::ErrorKind::InvalidData`] when the forest references a node that
    /// does not exist.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        for root in self.forest.roots() {
            self.write_node(writer, root, 0)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_node<W: Write + ?Sized>(&self, writer: &mut W, id: NodeId, depth: usize) -> io::Result<()> {
        let node = self.forest.node(id).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("forest references missing node {id}"),
            )
        })?;
        write!(writer, "{:depth$}", "")?;

        if let Some(uid) = node.uid() {
            return match self.names.display_name(uid) {
                Some(name) => writer.write_all(name.as_bytes()),
                None => write!(writer, "{uid}"),
            };
        }

        writer.write_all(b"(\n")?;
        let mut children = node.children().iter().peekable();
        while let Some(&child) = children.next() {
            self.write_node(writer, child, depth + 1)?;
            let separator: &[u8] = if children.peek().is_some() { b",\n" } else { b"\n" };
            writer.write_all(separator)?;
        }
        write!(writer, "{:depth$}):{}", "", node.level())
    }
}

impl<N: NameLookup + ?Sized> fmt::Display for TreeRenderer<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?)
    }
}
