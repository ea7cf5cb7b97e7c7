pub(crate) use super::{MatrixSource, MatrixSourceError};

mod ingest;
