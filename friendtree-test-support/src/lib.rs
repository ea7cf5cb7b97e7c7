//! Shared test utilities used across friendtree crates.

pub mod ci;
pub mod tracing;
