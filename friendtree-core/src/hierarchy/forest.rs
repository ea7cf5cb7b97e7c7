//! Incremental dendrogram construction over ascending distance triples.
//!
//! The forest fuses union-find bookkeeping with the dendrogram itself: every
//! uid maps to the handle of the root currently containing it, and the roots
//! are live tree nodes. Pairs are consumed in ascending order and each one
//! applies exactly one merge step:
//!
//! - both roots are older than the pair's distance: a new node is created at
//!   that distance with both roots as children;
//! - one root was formed at exactly this distance: it adopts the other root as
//!   an extra child;
//! - both roots were formed at this distance: the second dissolves into the
//!   first, which adopts its children directly.
//!
//! Collapsing same-distance events this way yields one flat multi-child node
//! per distinct distance instead of a chain of zero-height binary merges.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
};

use tracing::{debug, info, instrument};

use super::ForestError;
use super::node::{ClusterNode, NodeId};
use crate::{distance::DistanceTriple, graph::Uid};

/// Result of applying one distance triple to the forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Both ids already shared a root; nothing changed.
    AlreadyMerged {
        /// The shared root.
        root: NodeId,
    },
    /// A new internal node was created above two roots.
    Created {
        /// The new root.
        node: NodeId,
        /// The former roots, in child order.
        children: [NodeId; 2],
    },
    /// A root formed at this distance adopted another root as a child.
    Adopted {
        /// The adopting root.
        parent: NodeId,
        /// The root that became its child.
        child: NodeId,
    },
    /// Two roots formed at this distance were unified into one.
    Unified {
        /// The root that absorbed its sibling's children.
        survivor: NodeId,
        /// The dissolved root.
        retired: NodeId,
    },
}

impl MergeOutcome {
    /// Whether the step changed the root set.
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        !matches!(self, Self::AlreadyMerged { .. })
    }
}

/// Forest of dendrogram trees whose roots partition the entity set.
///
/// # Examples
/// ```
/// use friendtree_core::{ClusterForest, DistanceTriple, Uid};
///
/// let uids = [1, 2, 3].map(Uid::new);
/// let distances = [
///     DistanceTriple::new(0.3, Uid::new(1), Uid::new(2)),
///     DistanceTriple::new(0.3, Uid::new(1), Uid::new(3)),
///     DistanceTriple::new(0.3, Uid::new(2), Uid::new(3)),
/// ];
/// let forest = ClusterForest::build(uids, &distances, 1.0)?;
/// assert_eq!(forest.root_count(), 1);
///
/// let root = forest.roots().next().and_then(|id| forest.node(id)).expect("one root");
/// assert_eq!(root.level(), 0.3);
/// assert_eq!(root.children().len(), 3);
/// # Ok::<(), friendtree_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ClusterForest {
    nodes: Vec<ClusterNode>,
    roots: BTreeSet<NodeId>,
    root_of: BTreeMap<Uid, NodeId>,
    pairs_considered: usize,
    merges_applied: usize,
}

impl ClusterForest {
    /// Creates one singleton leaf root per uid.
    ///
    /// # Errors
    /// Returns [`ForestError::EmptyForest`] when `uids` is empty and
    /// [`ForestError::DuplicateUid`] when an id repeats.
    pub fn new<U>(uids: U) -> Result<Self, ForestError>
    where
        U: IntoIterator<Item = Uid>,
    {
        let mut forest = Self {
            nodes: Vec::new(),
            roots: BTreeSet::new(),
            root_of: BTreeMap::new(),
            pairs_considered: 0,
            merges_applied: 0,
        };
        for uid in uids {
            if forest.root_of.contains_key(&uid) {
                return Err(ForestError::DuplicateUid { uid });
            }
            let id = NodeId::new(forest.nodes.len());
            forest.nodes.push(ClusterNode::leaf(uid));
            forest.roots.insert(id);
            forest.root_of.insert(uid, id);
        }
        if forest.nodes.is_empty() {
            return Err(ForestError::EmptyForest);
        }
        Ok(forest)
    }

    /// Builds a forest from `uids` by consuming ascending `distances` until the
    /// first pair at or above `ceiling`.
    ///
    /// Pairs at or above the ceiling are never merged, so entities with no
    /// shared neighbours stay in separate roots.
    ///
    /// # Errors
    /// Propagates any [`ForestError`] raised by [`Self::new`], [`Self::merge`]
    /// or the final [`Self::check_partition`].
    #[instrument(
        name = "core.cluster",
        err,
        skip(uids, distances),
        fields(pairs = distances.len()),
    )]
    pub fn build<U>(uids: U, distances: &[DistanceTriple], ceiling: f64) -> Result<Self, ForestError>
    where
        U: IntoIterator<Item = Uid>,
    {
        let mut forest = Self::new(uids)?;
        for triple in distances {
            if triple.distance() >= ceiling {
                debug!(distance = triple.distance(), "reached merge ceiling");
                break;
            }
            let outcome = forest.merge(triple)?;
            trace_outcome(triple, outcome);
        }
        forest.check_partition()?;
        info!(
            roots = forest.root_count(),
            merges = forest.merges_applied,
            pairs_considered = forest.pairs_considered,
            "clustering completed"
        );
        Ok(forest)
    }

    /// Applies one distance triple.
    ///
    /// Triples must arrive in ascending order: neither root may have been
    /// formed above the triple's distance.
    ///
    /// # Errors
    /// Returns [`ForestError::InvalidDistance`] for a distance outside
    /// `[0, 1]`, [`ForestError::UnknownUid`] for an id not in the forest,
    /// [`ForestError::DescendingDistance`] when a root is already above the
    /// distance, and [`ForestError::RetiredRoot`] / [`ForestError::MissingNode`]
    /// when the uid index is inconsistent.
    pub fn merge(&mut self, triple: &DistanceTriple) -> Result<MergeOutcome, ForestError> {
        let distance = triple.distance();
        if !(0.0..=1.0).contains(&distance) {
            return Err(ForestError::InvalidDistance {
                first: triple.first(),
                second: triple.second(),
                distance,
            });
        }

        let first_root = self.resolve(triple.first())?;
        let second_root = self.resolve(triple.second())?;
        self.pairs_considered += 1;
        if first_root == second_root {
            return Ok(MergeOutcome::AlreadyMerged { root: first_root });
        }

        let first_level = self.get(first_root)?.level();
        let second_level = self.get(second_root)?.level();
        let outcome = match (
            first_level.total_cmp(&distance),
            second_level.total_cmp(&distance),
        ) {
            (Ordering::Less, Ordering::Less) => {
                self.create_parent(distance, first_root, second_root)?
            }
            (Ordering::Less, Ordering::Equal) => self.adopt(second_root, first_root)?,
            (Ordering::Equal, Ordering::Less) => self.adopt(first_root, second_root)?,
            (Ordering::Equal, Ordering::Equal) => self.unify(first_root, second_root)?,
            _ => {
                return Err(ForestError::DescendingDistance {
                    distance,
                    level: first_level.max(second_level),
                });
            }
        };
        self.merges_applied += 1;
        Ok(outcome)
    }

    /// Verifies that the roots' contained ids partition the entity set and
    /// that the uid index points every id at the root that contains it.
    ///
    /// # Errors
    /// Returns [`ForestError::PartitionViolation`] naming the first id that is
    /// duplicated, misindexed or missing, and [`ForestError::RetiredRoot`]
    /// when a retired node is still listed as a root.
    pub fn check_partition(&self) -> Result<(), ForestError> {
        let mut seen = BTreeSet::new();
        for &root in &self.roots {
            let node = self.get(root)?;
            for &uid in node.contained_uids() {
                if node.is_retired() {
                    return Err(ForestError::RetiredRoot { uid, node: root });
                }
                if !seen.insert(uid) || self.root_of.get(&uid) != Some(&root) {
                    return Err(ForestError::PartitionViolation { uid });
                }
            }
        }
        if let Some(&uid) = self.root_of.keys().find(|uid| !seen.contains(uid)) {
            return Err(ForestError::PartitionViolation { uid });
        }
        Ok(())
    }

    /// Current roots in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().copied()
    }

    /// Number of current roots.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Looks up a node by handle, including retired nodes.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&ClusterNode> {
        self.nodes.get(id.index())
    }

    /// Handle of the root currently containing `uid`.
    #[must_use]
    pub fn root_containing(&self, uid: Uid) -> Option<NodeId> {
        self.root_of.get(&uid).copied()
    }

    /// Number of entities (leaves) in the forest.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.root_of.len()
    }

    /// Number of nodes ever allocated, retired ones included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of triples applied, including those that found both ids merged.
    #[must_use]
    pub const fn pairs_considered(&self) -> usize {
        self.pairs_considered
    }

    /// Number of triples that changed the root set.
    #[must_use]
    pub const fn merges_applied(&self) -> usize {
        self.merges_applied
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&ClusterNode, ForestError> {
        self.nodes.get(id.index()).ok_or(ForestError::MissingNode { node: id })
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut ClusterNode, ForestError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(ForestError::MissingNode { node: id })
    }

    fn resolve(&self, uid: Uid) -> Result<NodeId, ForestError> {
        let root = self
            .root_of
            .get(&uid)
            .copied()
            .ok_or(ForestError::UnknownUid { uid })?;
        if self.get(root)?.is_retired() || !self.roots.contains(&root) {
            return Err(ForestError::RetiredRoot { uid, node: root });
        }
        Ok(root)
    }

    fn create_parent(
        &mut self,
        distance: f64,
        first_root: NodeId,
        second_root: NodeId,
    ) -> Result<MergeOutcome, ForestError> {
        let id = NodeId::new(self.nodes.len());
        let mut parent = ClusterNode::internal(distance);
        parent.add_child(first_root, self.get(first_root)?.contained_uids());
        parent.add_child(second_root, self.get(second_root)?.contained_uids());

        self.point_at(parent.contained_uids().iter().copied(), id);
        self.roots.remove(&first_root);
        self.roots.remove(&second_root);
        self.roots.insert(id);
        self.nodes.push(parent);
        Ok(MergeOutcome::Created {
            node: id,
            children: [second_root, first_root],
        })
    }

    fn adopt(&mut self, parent: NodeId, child: NodeId) -> Result<MergeOutcome, ForestError> {
        let adopted = self.get(child)?.contained_uids().clone();
        self.get_mut(parent)?.add_child(child, &adopted);
        self.point_at(adopted, parent);
        self.roots.remove(&child);
        Ok(MergeOutcome::Adopted { parent, child })
    }

    fn unify(&mut self, survivor: NodeId, retired: NodeId) -> Result<MergeOutcome, ForestError> {
        let dissolved = self.get_mut(retired)?;
        let nieces = dissolved.retire();
        let niece_uids = dissolved.contained_uids().clone();
        self.get_mut(survivor)?.adopt_nieces(nieces, &niece_uids);
        self.point_at(niece_uids, survivor);
        self.roots.remove(&retired);
        Ok(MergeOutcome::Unified { survivor, retired })
    }

    fn point_at(&mut self, uids: impl IntoIterator<Item = Uid>, root: NodeId) {
        for uid in uids {
            self.root_of.insert(uid, root);
        }
    }
}

fn trace_outcome(triple: &DistanceTriple, outcome: MergeOutcome) {
    let distance = triple.distance();
    let (first, second) = (triple.first(), triple.second());
    match outcome {
        MergeOutcome::AlreadyMerged { .. } => {}
        MergeOutcome::Created {
            node,
            children: [left, right],
        } => debug!(
            distance,
            %first,
            %second,
            node = %node,
            left = %left,
            right = %right,
            "created node"
        ),
        MergeOutcome::Adopted { parent, child } => debug!(
            distance,
            %first,
            %second,
            parent = %parent,
            child = %child,
            "adopted child"
        ),
        MergeOutcome::Unified { survivor, retired } => debug!(
            distance,
            %first,
            %second,
            survivor = %survivor,
            retired = %retired,
            "adopted children of dissolved sibling"
        ),
    }
}
