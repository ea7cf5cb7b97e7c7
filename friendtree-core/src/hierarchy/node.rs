//! Dendrogram nodes stored in the forest arena.

use std::{collections::BTreeSet, fmt};

use crate::graph::Uid;

/// Level carried by leaves: strictly below any Jaccard distance, meaning
/// "not yet merged".
pub const LEAF_LEVEL: f64 = -1.0;

/// Stable handle to a node in a [`crate::ClusterForest`] arena.
///
/// Handles are issued in creation order, so comparing them compares node age.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A leaf (one entity) or an internal node (a cluster formed at `level`).
///
/// Children are owned exclusively by their parent and referenced by
/// [`NodeId`]. `contained_uids` caches the ids of every leaf reachable from
/// the node and grows whenever the node gains children.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterNode {
    level: f64,
    uid: Option<Uid>,
    children: Vec<NodeId>,
    contained: BTreeSet<Uid>,
    retired: bool,
}

impl ClusterNode {
    pub(crate) fn leaf(uid: Uid) -> Self {
        Self {
            level: LEAF_LEVEL,
            uid: Some(uid),
            children: Vec::new(),
            contained: BTreeSet::from([uid]),
            retired: false,
        }
    }

    pub(crate) fn internal(level: f64) -> Self {
        Self {
            level,
            uid: None,
            children: Vec::new(),
            contained: BTreeSet::new(),
            retired: false,
        }
    }

    /// Distance at which the node was formed, or [`LEAF_LEVEL`] for leaves.
    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Entity id for leaves; `None` for internal nodes.
    #[must_use]
    pub const fn uid(&self) -> Option<Uid> {
        self.uid
    }

    /// Whether the node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.uid.is_some()
    }

    /// Children in display order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Every leaf id reachable from this node.
    #[must_use]
    pub const fn contained_uids(&self) -> &BTreeSet<Uid> {
        &self.contained
    }

    /// Whether the node was dissolved into a sibling formed at the same level.
    ///
    /// Retired nodes keep their level and contained ids for inspection but no
    /// longer own children and are unreachable from the forest roots.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        self.retired
    }

    /// Prepends `child`, absorbing the ids it contains.
    pub(crate) fn add_child(&mut self, child: NodeId, child_uids: &BTreeSet<Uid>) {
        self.children.insert(0, child);
        self.contained.extend(child_uids.iter().copied());
    }

    /// Splices a dissolved sibling's children in front of this node's own.
    pub(crate) fn adopt_nieces(&mut self, nieces: Vec<NodeId>, niece_uids: &BTreeSet<Uid>) {
        let own = std::mem::replace(&mut self.children, nieces);
        self.children.extend(own);
        self.contained.extend(niece_uids.iter().copied());
    }

    /// Marks the node retired and hands its children to the caller.
    pub(crate) fn retire(&mut self) -> Vec<NodeId> {
        self.retired = true;
        std::mem::take(&mut self.children)
    }
}
