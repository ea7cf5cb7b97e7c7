//! Record parsers for the adjacency CSV and names TSV formats.
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use friendtree_core::{AdjacencyMap, NameMap, Uid};

use crate::errors::MatrixSourceError;

/// First cell of the adjacency header line.
pub(crate) const HEADER_CELL: &str = "Friend";

/// One-based line on which `record` starts.
fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, Position::line)
}

/// Cells of a comma-terminated record. The empty field left by a trailing
/// comma is dropped.
fn cells(record: &StringRecord) -> impl Iterator<Item = &str> {
    let len = match record.iter().last() {
        Some("") => record.len() - 1,
        _ => record.len(),
    };
    record.iter().take(len)
}

fn parse_uid(line: u64, value: &str) -> Result<Uid, MatrixSourceError> {
    value.parse().map_err(|_| MatrixSourceError::InvalidUid {
        line,
        value: value.to_owned(),
    })
}

fn parse_cell(line: u64, column: usize, value: &str) -> Result<bool, MatrixSourceError> {
    match value {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(MatrixSourceError::InvalidCell {
            line,
            column,
            value: value.to_owned(),
        }),
    }
}

/// Parses an adjacency matrix in the `Friend,` CSV layout.
///
/// Row labels may be padded and quoted cells are unwrapped; blank lines are
/// skipped.
pub(crate) fn read_adjacency<R: Read>(reader: R) -> Result<AdjacencyMap, MatrixSourceError> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records();

    let header = records.next().ok_or(MatrixSourceError::EmptyInput)??;
    let header_line = line_of(&header);
    let mut header_cells = cells(&header);
    let first = header_cells.next().unwrap_or_default();
    if first != HEADER_CELL {
        return Err(MatrixSourceError::MissingHeader {
            line: header_line,
            found: first.to_owned(),
        });
    }
    let mut seen = BTreeSet::new();
    let mut columns = Vec::new();
    for value in header_cells {
        let uid = parse_uid(header_line, value)?;
        if !seen.insert(uid) {
            return Err(MatrixSourceError::DuplicateColumn { uid: uid.get() });
        }
        columns.push(uid);
    }

    let mut rows = BTreeMap::new();
    for entry in records {
        let record = entry?;
        let line = line_of(&record);
        let mut row_cells = cells(&record);
        let uid = parse_uid(line, row_cells.next().unwrap_or_default())?;
        let values: Vec<&str> = row_cells.collect();
        if values.len() != columns.len() {
            return Err(MatrixSourceError::RowLength {
                line,
                expected: columns.len(),
                actual: values.len(),
            });
        }
        let row = columns
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (&column, value))| Ok((column, parse_cell(line, index + 1, value)?)))
            .collect::<Result<BTreeMap<Uid, bool>, MatrixSourceError>>()?;
        if rows.insert(uid, row).is_some() {
            return Err(MatrixSourceError::DuplicateRow { line, uid: uid.get() });
        }
    }

    Ok(AdjacencyMap::try_from_rows(rows)?)
}

/// Parses `uid<TAB>name` records. Lines starting with `#` are comments and
/// names are kept verbatim apart from surrounding whitespace.
pub(crate) fn read_names<R: Read>(reader: R) -> Result<NameMap, MatrixSourceError> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut names = NameMap::default();
    for entry in records.records() {
        let record = entry?;
        let line = line_of(&record);
        let (Some(raw_uid), Some(name), None) = (record.get(0), record.get(1), record.get(2)) else {
            return Err(MatrixSourceError::InvalidNameLine { line });
        };
        names.insert(parse_uid(line, raw_uid)?, name);
    }
    Ok(names)
}
