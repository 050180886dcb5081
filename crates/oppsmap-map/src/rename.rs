//! Declarative column renaming.

use std::collections::BTreeMap;

use oppsmap_ingest::CsvTable;

/// An injective partial mapping from vendor column names to canonical ones.
///
/// Columns not mentioned pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct RenameTable {
    mapping: BTreeMap<String, String>,
}

impl RenameTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mapping = pairs
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect();
        Self { mapping }
    }

    /// Canonical name for a raw header, if a rename is declared.
    pub fn canonical(&self, header: &str) -> Option<&str> {
        self.mapping.get(header).map(String::as_str)
    }

    /// Apply the renames to a table, returning a new table. The input is
    /// untouched.
    pub fn apply(&self, table: &CsvTable) -> CsvTable {
        let headers = table
            .headers
            .iter()
            .map(|header| {
                self.canonical(header)
                    .map_or_else(|| header.clone(), ToString::to_string)
            })
            .collect();
        CsvTable {
            headers,
            rows: table.rows.clone(),
        }
    }
}
