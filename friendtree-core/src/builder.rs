//! Builder utilities for configuring friendtree runs.
//!
//! Validates the merge ceiling and matrix label width before constructing
//! [`FriendTree`] instances.

use crate::{
    Result, error::FriendTreeError, friendtree::FriendTree, render::DEFAULT_ROW_LABEL_WIDTH,
};

/// Pairs at or above this distance are never merged by default.
pub const DEFAULT_MERGE_CEILING: f64 = 1.0;

/// Widest accepted row label in the reordered matrix.
pub const MAX_ROW_LABEL_WIDTH: usize = 64;

/// Configures and constructs [`FriendTree`] instances.
///
/// # Examples
/// ```
/// use friendtree_core::FriendTreeBuilder;
///
/// let tree = FriendTreeBuilder::new()
///     .with_merge_ceiling(0.8)
///     .with_row_label_width(6)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(tree.merge_ceiling(), 0.8);
/// assert_eq!(tree.row_label_width(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct FriendTreeBuilder {
    merge_ceiling: f64,
    row_label_width: usize,
}

impl Default for FriendTreeBuilder {
    fn default() -> Self {
        Self {
            merge_ceiling: DEFAULT_MERGE_CEILING,
            row_label_width: DEFAULT_ROW_LABEL_WIDTH,
        }
    }
}

impl FriendTreeBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use friendtree_core::FriendTreeBuilder;
    ///
    /// let builder = FriendTreeBuilder::new();
    /// assert_eq!(builder.merge_ceiling(), 1.0);
    /// assert_eq!(builder.row_label_width(), 16);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the distance at which merging stops.
    #[must_use]
    pub fn with_merge_ceiling(mut self, ceiling: f64) -> Self {
        self.merge_ceiling = ceiling;
        self
    }

    /// Returns the configured merge ceiling.
    #[must_use]
    pub fn merge_ceiling(&self) -> f64 {
        self.merge_ceiling
    }

    /// Overrides the width of the matrix row labels.
    #[must_use]
    pub fn with_row_label_width(mut self, width: usize) -> Self {
        self.row_label_width = width;
        self
    }

    /// Returns the configured row label width.
    #[must_use]
    pub fn row_label_width(&self) -> usize {
        self.row_label_width
    }

    /// Validates the configuration and constructs a [`FriendTree`] instance.
    ///
    /// # Errors
    /// Returns [`FriendTreeError::InvalidMergeCeiling`] unless the ceiling is
    /// finite and within `(0, 1]`, and
    /// [`FriendTreeError::InvalidRowLabelWidth`] when the label width exceeds
    /// [`MAX_ROW_LABEL_WIDTH`].
    ///
    /// # Examples
    /// ```
    /// use friendtree_core::{FriendTreeBuilder, FriendTreeError};
    ///
    /// let err = FriendTreeBuilder::new()
    ///     .with_merge_ceiling(0.0)
    ///     .build()
    ///     .expect_err("zero ceiling merges nothing");
    /// assert!(matches!(err, FriendTreeError::InvalidMergeCeiling { .. }));
    /// ```
    pub fn build(self) -> Result<FriendTree> {
        let ceiling = self.merge_ceiling;
        if !(ceiling.is_finite() && ceiling > 0.0 && ceiling <= 1.0) {
            return Err(FriendTreeError::InvalidMergeCeiling { got: ceiling });
        }
        if self.row_label_width > MAX_ROW_LABEL_WIDTH {
            return Err(FriendTreeError::InvalidRowLabelWidth {
                got: self.row_label_width,
                max: MAX_ROW_LABEL_WIDTH,
            });
        }
        Ok(FriendTree::new(ceiling, self.row_label_width))
    }
}
