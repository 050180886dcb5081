//! Delimited table loading.
//!
//! Every cell is coerced to trimmed text before it leaves this module; an
//! absent or short cell becomes the empty string so downstream equality
//! checks never deal with missing values. Banner rows ahead of the header
//! are skipped by a fixed per-source count, never detected heuristically.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use oppsmap_model::{MapperError, Result};

/// An in-memory delimited table: one header row and uniformly sized rows of
/// text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a header by exact name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file into a [`CsvTable`], skipping `skip_rows` leading
/// banner rows before the header row.
///
/// # Errors
///
/// Returns [`MapperError::SourceUnavailable`] when the path does not exist
/// or cannot be parsed as a delimited file.
pub fn read_csv_table(path: &Path, skip_rows: usize) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| MapperError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

    let mut records = reader.records();
    for _ in 0..skip_rows {
        match records.next() {
            Some(Ok(_)) => {}
            Some(Err(error)) => {
                return Err(MapperError::SourceUnavailable {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                });
            }
            None => return Ok(CsvTable::default()),
        }
    }

    let headers: Vec<String> = match records.next() {
        Some(Ok(record)) => record.iter().map(normalize_header).collect(),
        Some(Err(error)) => {
            return Err(MapperError::SourceUnavailable {
                path: path.to_path_buf(),
                reason: error.to_string(),
            });
        }
        None => return Ok(CsvTable::default()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|error| MapperError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        skip_rows,
        columns = headers.len(),
        rows = rows.len(),
        "csv table loaded"
    );
    Ok(CsvTable { headers, rows })
}
