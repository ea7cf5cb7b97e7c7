//! Benchmark support crate for friendtree.
//!
//! Provides synthetic social graphs and parameter types used by Criterion
//! benchmarks for the distance, clustering and rendering stages.

pub mod error;
pub mod params;
pub mod source;
