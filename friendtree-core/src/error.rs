//! Error types for the friendtree core library.
//!
//! Defines the error enums exposed by the public API and a convenient result
//! alias. Stage-specific errors ([`crate::ForestError`], [`crate::MatrixError`])
//! live next to the stage that raises them and are wrapped here.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{graph::Uid, hierarchy::ForestError, render::MatrixError};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating or building an [`crate::AdjacencyMap`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AdjacencyError {
    /// The graph contained no entities.
    #[error("adjacency map contains no entities")]
    EmptyGraph,
    /// A row lacked an entry for one of the graph's entities.
    #[error("row {row} has no entry for column {column}")]
    MissingCell {
        /// Entity whose row is incomplete.
        row: Uid,
        /// Entity missing from that row.
        column: Uid,
    },
    /// A row referenced an entity that has no row of its own.
    #[error("row {row} has an entry for unknown entity {column}")]
    UnknownCell {
        /// Entity whose row carries the stray entry.
        row: Uid,
        /// Entity that is not part of the graph.
        column: Uid,
    },
    /// An edge endpoint was not among the declared entities.
    #[error("edge endpoint {uid} is not a declared entity")]
    UnknownEndpoint {
        /// The undeclared endpoint.
        uid: Uid,
    },
}

define_error_codes! {
    /// Stable codes describing [`AdjacencyError`] variants.
    enum AdjacencyErrorCode for AdjacencyError {
        /// The graph contained no entities.
        EmptyGraph => EmptyGraph => "ADJACENCY_EMPTY_GRAPH",
        /// A row lacked an entry for one of the graph's entities.
        MissingCell => MissingCell { .. } => "ADJACENCY_MISSING_CELL",
        /// A row referenced an entity that has no row of its own.
        UnknownCell => UnknownCell { .. } => "ADJACENCY_UNKNOWN_CELL",
        /// An edge endpoint was not among the declared entities.
        UnknownEndpoint => UnknownEndpoint { .. } => "ADJACENCY_UNKNOWN_ENDPOINT",
    }
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// No entities were supplied.
        EmptyForest => EmptyForest => "FOREST_EMPTY",
        /// An id was supplied twice.
        DuplicateUid => DuplicateUid { .. } => "FOREST_DUPLICATE_UID",
        /// A triple named an unknown id.
        UnknownUid => UnknownUid { .. } => "FOREST_UNKNOWN_UID",
        /// A distance was outside `[0, 1]`.
        InvalidDistance => InvalidDistance { .. } => "FOREST_INVALID_DISTANCE",
        /// Input triples were not ascending.
        DescendingDistance => DescendingDistance { .. } => "FOREST_DESCENDING_DISTANCE",
        /// An id resolved to a non-root node.
        RetiredRoot => RetiredRoot { .. } => "FOREST_RETIRED_ROOT",
        /// A handle pointed outside the arena.
        MissingNode => MissingNode { .. } => "FOREST_MISSING_NODE",
        /// The partition invariant was violated.
        PartitionViolation => PartitionViolation { .. } => "FOREST_PARTITION_VIOLATION",
    }
}

define_error_codes! {
    /// Stable codes describing [`MatrixError`] variants.
    enum MatrixErrorCode for MatrixError {
        /// A leaf was reachable more than once.
        DuplicateLeaf => DuplicateLeaf { .. } => "MATRIX_DUPLICATE_LEAF",
        /// A child handle was dangling.
        MissingNode => MissingNode { .. } => "MATRIX_MISSING_NODE",
        /// A leaf had no adjacency row.
        UnknownLeaf => UnknownLeaf { .. } => "MATRIX_UNKNOWN_LEAF",
        /// The leaf order skipped entities.
        IncompleteOrder => IncompleteOrder { .. } => "MATRIX_INCOMPLETE_ORDER",
    }
}

/// Error type produced when configuring or running [`crate::FriendTree`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FriendTreeError {
    /// The merge ceiling must be a finite value in `(0, 1]`.
    #[error("merge_ceiling must be within (0, 1] (got {got})")]
    InvalidMergeCeiling {
        /// The rejected ceiling.
        got: f64,
    },
    /// The row label width exceeded the supported maximum.
    #[error("row_label_width must be at most {max} (got {got})")]
    InvalidRowLabelWidth {
        /// The rejected width.
        got: usize,
        /// Largest accepted width.
        max: usize,
    },
    /// Building the cluster forest failed for the named source.
    #[error("clustering `{data_source}` failed: {error}")]
    Forest {
        /// Identifier for the graph source being clustered.
        data_source: Arc<str>,
        #[source]
        /// Underlying forest error.
        error: ForestError,
    },
    /// Reordering the adjacency matrix failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

define_error_codes! {
    /// Stable codes describing [`FriendTreeError`] variants.
    enum FriendTreeErrorCode for FriendTreeError {
        /// The merge ceiling must be a finite value in `(0, 1]`.
        InvalidMergeCeiling => InvalidMergeCeiling { .. } => "FRIENDTREE_INVALID_MERGE_CEILING",
        /// The row label width exceeded the supported maximum.
        InvalidRowLabelWidth => InvalidRowLabelWidth { .. } => "FRIENDTREE_INVALID_ROW_LABEL_WIDTH",
        /// Building the cluster forest failed.
        ForestFailure => Forest { .. } => "FRIENDTREE_FOREST_FAILURE",
        /// Reordering the adjacency matrix failed.
        MatrixFailure => Matrix(..) => "FRIENDTREE_MATRIX_FAILURE",
    }
}

impl FriendTreeError {
    /// Retrieve the inner forest error code when clustering failed.
    #[must_use]
    pub const fn forest_code(&self) -> Option<&'static str> {
        match self {
            Self::Forest { error, .. } => Some(error.code().as_str()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, FriendTreeError>;
