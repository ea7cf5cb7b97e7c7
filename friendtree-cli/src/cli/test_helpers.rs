//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::commands::run_command;
use super::{CliError, RunCommand};

/// Two groups `{1, 2}` and `{3, 4}` connected only across groups.
pub(super) const TWO_PAIRS: &str =
    "Friend,1,2,3,4,\n1,0,0,1,1,\n2,0,0,1,1,\n3,1,1,0,0,\n4,1,1,0,0,\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// A `run` command with default tuning writing the matrix into `dir`.
pub(super) fn run_args(dir: &Path, adjacency: PathBuf) -> RunCommand {
    RunCommand {
        adjacency,
        names: None,
        matrix_out: dir.join("ordered.csv"),
        merge_ceiling: 1.0,
        row_label_width: 16,
        name: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
