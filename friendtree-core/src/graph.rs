//! Entity identifiers, the adjacency relation and display-name lookups.
//!
//! The adjacency map is taken as given: rows are validated to be square over
//! the full entity set but the relation is never re-symmetrised.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    hash::BuildHasher,
    str::FromStr,
};

use crate::error::AdjacencyError;

/// Opaque identifier for a person in the graph.
///
/// Identifiers are totally ordered; the order fixes the canonical orientation
/// of every distance pair and every deterministic tie-break.
///
/// # Examples
/// ```
/// use friendtree_core::Uid;
///
/// let uid: Uid = "42".parse().expect("decimal ids parse");
/// assert_eq!(uid, Uid::new(42));
/// assert_eq!(uid.to_string(), "42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(u64);

impl Uid {
    /// Wraps a raw numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(raw: u64) -> Self { Self(raw) }

    /// Returns the raw numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Uid {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for Uid {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Square boolean relation marking which entities are mutually connected.
///
/// # Examples
/// ```
/// use friendtree_core::{AdjacencyMap, Uid};
///
/// let uids = [1, 2, 3].map(Uid::new);
/// let graph = AdjacencyMap::from_edges(uids, [(Uid::new(1), Uid::new(2))])
///     .expect("endpoints are declared");
/// assert_eq!(graph.len(), 3);
/// assert!(graph.is_adjacent(Uid::new(2), Uid::new(1)));
/// assert!(!graph.is_adjacent(Uid::new(1), Uid::new(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMap {
    rows: BTreeMap<Uid, BTreeMap<Uid, bool>>,
}

impl AdjacencyMap {
    /// Validates explicit rows and wraps them.
    ///
    /// Every row must hold exactly one entry per entity in the graph,
    /// including the row's own entity.
    ///
    /// # Errors
    /// Returns [`AdjacencyError::EmptyGraph`] when there are no rows,
    /// [`AdjacencyError::MissingCell`] when a row omits an entity and
    /// [`AdjacencyError::UnknownCell`] when a row names an entity without a row.
    pub fn try_from_rows(rows: BTreeMap<Uid, BTreeMap<Uid, bool>>) -> Result<Self, AdjacencyError> {
        if rows.is_empty() {
            return Err(AdjacencyError::EmptyGraph);
        }

        for (&row, cells) in &rows {
            if let Some(&column) = rows.keys().find(|uid| !cells.contains_key(uid)) {
                return Err(AdjacencyError::MissingCell { row, column });
            }
            if let Some(&column) = cells.keys().find(|uid| !rows.contains_key(uid)) {
                return Err(AdjacencyError::UnknownCell { row, column });
            }
        }

        Ok(Self { rows })
    }

    /// Builds a symmetric adjacency map from an undirected edge list.
    ///
    /// # Errors
    /// Returns [`AdjacencyError::EmptyGraph`] when `uids` is empty and
    /// [`AdjacencyError::UnknownEndpoint`] when an edge names an undeclared
    /// entity.
    pub fn from_edges<U, E>(uids: U, edges: E) -> Result<Self, AdjacencyError>
    where
        U: IntoIterator<Item = Uid>,
        E: IntoIterator<Item = (Uid, Uid)>,
    {
        let declared: BTreeSet<Uid> = uids.into_iter().collect();
        if declared.is_empty() {
            return Err(AdjacencyError::EmptyGraph);
        }

        let blank: BTreeMap<Uid, bool> = declared.iter().map(|&uid| (uid, false)).collect();
        let mut rows: BTreeMap<Uid, BTreeMap<Uid, bool>> = declared
            .iter()
            .map(|&uid| (uid, blank.clone()))
            .collect();

        for (left, right) in edges {
            for uid in [left, right] {
                if !declared.contains(&uid) {
                    return Err(AdjacencyError::UnknownEndpoint { uid });
                }
            }
            for (row, column) in [(left, right), (right, left)] {
                if let Some(cell) = rows.get_mut(&row).and_then(|cells| cells.get_mut(&column)) {
                    *cell = true;
                }
            }
        }

        Ok(Self { rows })
    }

    /// Number of entities in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a validated map; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the entity ids in ascending order.
    pub fn uids(&self) -> impl ExactSizeIterator<Item = Uid> + '_ {
        self.rows.keys().copied()
    }

    /// Returns whether the map contains `uid`.
    #[must_use]
    pub fn contains(&self, uid: Uid) -> bool {
        self.rows.contains_key(&uid)
    }

    /// Returns the stored cell for `(row, column)`; ids outside the graph read
    /// as not adjacent.
    #[must_use]
    pub fn is_adjacent(&self, row: Uid, column: Uid) -> bool {
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(&column))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the neighbour set of `uid`: every column marked adjacent in its
    /// row. Unknown ids have no neighbours.
    #[must_use]
    pub fn neighbors(&self, uid: Uid) -> BTreeSet<Uid> {
        self.rows
            .get(&uid)
            .map(|cells| {
                cells
                    .iter()
                    .filter_map(|(&column, &adjacent)| adjacent.then_some(column))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Partial mapping from entity ids to human-readable names.
pub trait NameLookup {
    /// Returns the display name for `uid`, if one is known.
    fn display_name(&self, uid: Uid) -> Option<&str>;
}

impl<S: BuildHasher> NameLookup for HashMap<Uid, String, S> {
    fn display_name(&self, uid: Uid) -> Option<&str> {
        self.get(&uid).map(String::as_str)
    }
}

impl NameLookup for BTreeMap<Uid, String> {
    fn display_name(&self, uid: Uid) -> Option<&str> {
        self.get(&uid).map(String::as_str)
    }
}

/// Owned display-name table supplied by a [`crate::GraphSource`].
///
/// # Examples
/// ```
/// use friendtree_core::{NameLookup, NameMap, Uid};
///
/// let mut names = NameMap::default();
/// names.insert(Uid::new(7), "Ada");
/// assert_eq!(names.display_name(Uid::new(7)), Some("Ada"));
/// assert_eq!(names.display_name(Uid::new(8)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameMap {
    names: BTreeMap<Uid, String>,
}

impl NameMap {
    /// Records `name` for `uid`, returning any name it replaced.
    pub fn insert(&mut self, uid: Uid, name: impl Into<String>) -> Option<String> {
        self.names.insert(uid, name.into())
    }

    /// Number of named entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameLookup for NameMap {
    fn display_name(&self, uid: Uid) -> Option<&str> {
        self.names.display_name(uid)
    }
}

impl FromIterator<(Uid, String)> for NameMap {
    fn from_iter<I: IntoIterator<Item = (Uid, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
