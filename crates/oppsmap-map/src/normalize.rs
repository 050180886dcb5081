//! Normalization: rename application plus required-column checking.

use std::collections::BTreeSet;

use tracing::warn;

use oppsmap_ingest::CsvTable;
use oppsmap_model::{SchemaReport, SourceKind};

use crate::tables::rename_table;

/// A source table after renaming, paired with its schema report.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub source: SourceKind,
    pub table: CsvTable,
    pub report: SchemaReport,
}

/// Rename a loaded table onto the canonical column set for its source kind
/// and report (without failing on) required columns that are still absent.
pub fn normalize(kind: SourceKind, table: &CsvTable) -> NormalizedTable {
    let renamed = rename_table(kind).apply(table);
    let present: BTreeSet<&str> = renamed.headers.iter().map(String::as_str).collect();
    let missing: Vec<String> = kind
        .required_columns()
        .iter()
        .filter(|column| !present.contains(**column))
        .map(|column| (*column).to_string())
        .collect();
    for column in &missing {
        warn!(
            source = %kind,
            column = %column,
            "required canonical column missing; lookups on it will find no matches"
        );
    }
    NormalizedTable {
        source: kind,
        table: renamed,
        report: SchemaReport {
            source: kind,
            missing,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn renames_and_passes_through() {
        let raw = table(&["SEQNUM", "LONG DESCRIPTION", "VENDOR NOTE"]);
        let normalized = normalize(SourceKind::Hcpcs, &raw);
        assert_eq!(
            normalized.table.headers,
            vec!["SEQNUM", "LONG_DESCRIPTION", "VENDOR NOTE"]
        );
    }

    #[test]
    fn reports_missing_required_columns() {
        let raw = table(&["SEQNUM", "HCPC"]);
        let normalized = normalize(SourceKind::Hcpcs, &raw);
        assert_eq!(
            normalized.report.missing,
            vec!["OPPS", "LONG_DESCRIPTION", "SHORT_DESCRIPTION"]
        );
        assert!(!normalized.report.has_column("OPPS"));
        assert!(normalized.report.has_column("SEQNUM"));
    }

    #[test]
    fn clean_report_when_all_present() {
        let raw = table(&["APC", "Group Title", "Relative Weight", "Payment Rate"]);
        let normalized = normalize(SourceKind::AddendumA, &raw);
        assert!(normalized.report.is_clean());
        assert_eq!(normalized.table.headers[1], "Group_Title");
    }
}
