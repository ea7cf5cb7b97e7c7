//! Command implementations and argument parsing for the friendtree CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use friendtree_core::{
    DEFAULT_MERGE_CEILING, DEFAULT_ROW_LABEL_WIDTH, FriendTree, FriendTreeBuilder,
    FriendTreeError, GraphSource,
};
use friendtree_providers_matrix::{MatrixSource, MatrixSourceError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "friendtree",
    about = "Cluster a social graph by shared friends and render the hierarchy."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a graph, print its tree and write the tree-ordered matrix.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Adjacency matrix CSV with a `Friend,` header row.
    pub adjacency: PathBuf,

    /// Display names, one `uid<TAB>name` pair per line.
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// Destination for the tree-ordered matrix CSV.
    #[arg(long = "matrix-out")]
    pub matrix_out: PathBuf,

    /// Pairs at or above this distance are never merged.
    #[arg(long = "merge-ceiling", default_value_t = DEFAULT_MERGE_CEILING)]
    pub merge_ceiling: f64,

    /// Width of the right-aligned row labels in the matrix.
    #[arg(long = "row-label-width", default_value_t = DEFAULT_ROW_LABEL_WIDTH)]
    pub row_label_width: usize,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or writing a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input files could not be parsed.
    #[error(transparent)]
    Source(#[from] MatrixSourceError),
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] FriendTreeError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the graph source.
    pub data_source: String,
    /// Rendered tree, one bracketed expression per root.
    pub tree: String,
    /// Number of clustered entities.
    pub entities: usize,
    /// Number of roots in the final forest.
    pub roots: usize,
    /// Where the tree-ordered matrix was written.
    pub matrix_path: PathBuf,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, clustering or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use friendtree_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let adjacency = dir.path().join("graph.csv");
/// std::fs::write(&adjacency, "Friend,1,2,\n1,0,1,\n2,1,0,\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         adjacency,
///         names: None,
///         matrix_out: dir.path().join("ordered.csv"),
///         merge_ceiling: 1.0,
///         row_label_width: 2,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.entities, 2);
/// assert_eq!(summary.tree, "1\n2\n");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        adjacency = %command.adjacency.display(),
        merge_ceiling = command.merge_ceiling,
        row_label_width = command.row_label_width,
        data_source = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let friendtree = FriendTreeBuilder::new()
        .with_merge_ceiling(command.merge_ceiling)
        .with_row_label_width(command.row_label_width)
        .build()?;

    let source = load_source(&command)?;
    Span::current().record("data_source", field::display(source.name()));

    let summary = execute(&friendtree, &source, &command.matrix_out)?;
    info!(
        data_source = summary.data_source.as_str(),
        entities = summary.entities,
        roots = summary.roots,
        matrix = %summary.matrix_path.display(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn load_source(command: &RunCommand) -> Result<MatrixSource, CliError> {
    let name = derive_data_source_name(&command.adjacency, command.name.as_deref());
    let mut source = MatrixSource::try_from_reader(name, open_reader(&command.adjacency)?)?;
    if let Some(path) = &command.names {
        source = source.with_names_reader(open_reader(path)?)?;
    }
    Ok(source)
}

fn execute<S: GraphSource>(
    friendtree: &FriendTree,
    source: &S,
    matrix_out: &Path,
) -> Result<ExecutionSummary, CliError> {
    let clustering = friendtree.run(source)?;
    let tree = clustering.tree(source.names()).to_string();
    let matrix = clustering.matrix(source.adjacency())?;
    write_matrix(matrix_out, |writer| matrix.write_csv(writer))?;

    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        tree,
        entities: clustering.entity_count(),
        roots: clustering.root_count(),
        matrix_path: matrix_out.to_path_buf(),
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<File, CliError> {
    Span::current().record("path", field::display(path.display()));
    File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(name = "cli.write_matrix", err, skip(write), fields(path = %path.display()))]
fn write_matrix<F>(path: &Path, write: F) -> Result<(), CliError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    write(&mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Writes the rendered tree of `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use friendtree_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     tree: "(\n 1,\n 2\n):0\n".into(),
///     entities: 2,
///     roots: 1,
///     matrix_path: PathBuf::from("ordered.csv"),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "(\n 1,\n 2\n):0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(summary.tree.as_bytes())
}
