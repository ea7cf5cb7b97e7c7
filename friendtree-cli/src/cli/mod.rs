//! Command-line interface orchestration for friendtree.
//!
//! The `run` command loads an adjacency matrix (and optionally display
//! names), clusters it, prints the tree to stdout and writes the tree-ordered
//! matrix to a file.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
