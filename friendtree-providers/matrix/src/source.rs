//! Graph source backed by matrix and names files.
use std::{fs::File, io::Read, path::Path};

use friendtree_core::{AdjacencyMap, GraphSource, NameMap};
use tracing::info;

use crate::errors::MatrixSourceError;
use crate::ingest::{read_adjacency, read_names};

/// In-memory social graph loaded from text inputs.
#[derive(Debug, Clone)]
pub struct MatrixSource {
    name: String,
    adjacency: AdjacencyMap,
    names: NameMap,
}

impl MatrixSource {
    /// Wraps an already materialised graph.
    #[must_use]
    pub fn new(name: impl Into<String>, adjacency: AdjacencyMap, names: NameMap) -> Self {
        Self {
            name: name.into(),
            adjacency,
            names,
        }
    }

    /// Parses an adjacency matrix from `reader`. The source starts without
    /// display names.
    ///
    /// # Errors
    /// Returns [`MatrixSourceError`] when the input is malformed or the rows
    /// do not form a square matrix over the header ids.
    ///
    /// # Examples
    /// ```
    /// use friendtree_core::{GraphSource, Uid};
    /// use friendtree_providers_matrix::MatrixSource;
    ///
    /// let csv = "Friend,1,2,\n1,0,1,\n2,1,0,\n";
    /// let source = MatrixSource::try_from_reader("demo", csv.as_bytes())?;
    /// assert_eq!(source.entity_count(), 2);
    /// assert!(source.adjacency().is_adjacent(Uid::new(1), Uid::new(2)));
    /// # Ok::<(), friendtree_providers_matrix::MatrixSourceError>(())
    /// ```
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, MatrixSourceError> {
        Ok(Self::new(name, read_adjacency(reader)?, NameMap::default()))
    }

    /// Replaces the display names with those parsed from `reader`.
    ///
    /// # Errors
    /// Returns [`MatrixSourceError`] when a line is not `uid<TAB>name`.
    pub fn with_names_reader<R: Read>(mut self, reader: R) -> Result<Self, MatrixSourceError> {
        self.names = read_names(reader)?;
        Ok(self)
    }

    /// Loads the adjacency file at `adjacency` and, when given, the names file
    /// at `names`. The source is named after the adjacency path.
    ///
    /// # Errors
    /// Returns [`MatrixSourceError::Io`] when a file cannot be opened and the
    /// parse errors of [`Self::try_from_reader`] and
    /// [`Self::with_names_reader`] otherwise.
    pub fn try_from_paths(
        adjacency: impl AsRef<Path>,
        names: Option<&Path>,
    ) -> Result<Self, MatrixSourceError> {
        let adjacency = adjacency.as_ref();
        let mut source =
            Self::try_from_reader(adjacency.display().to_string(), File::open(adjacency)?)?;
        if let Some(path) = names {
            source = source.with_names_reader(File::open(path)?)?;
        }
        info!(
            data_source = %source.name,
            entities = source.adjacency.len(),
            names = source.names.len(),
            "graph loaded"
        );
        Ok(source)
    }
}

impl GraphSource for MatrixSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    fn names(&self) -> &NameMap {
        &self.names
    }
}
