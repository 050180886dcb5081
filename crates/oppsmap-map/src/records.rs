//! Typed record construction.
//!
//! Each normalized table becomes a vector of typed records with the
//! canonical fields as struct fields. Whether a join column exists on the
//! source is decided here, once, and carried as a capability flag; the
//! engine checks the flag instead of rediscovering absence per lookup.

use std::collections::{BTreeMap, BTreeSet};

use oppsmap_model::{AddendumARecord, AddendumBRecord, ProcedureRecord, SourceKind};

use crate::normalize::NormalizedTable;

/// The procedure catalog as typed records plus join-column capabilities.
#[derive(Debug, Clone, Default)]
pub struct ProcedureTable {
    pub records: Vec<ProcedureRecord>,
    pub has_seqnum: bool,
    pub has_hcpc: bool,
    pub has_opps: bool,
}

/// Addendum A as typed records plus its join-column capability.
#[derive(Debug, Clone, Default)]
pub struct AddendumATable {
    pub records: Vec<AddendumARecord>,
    pub has_apc: bool,
}

/// Addendum B as typed records plus its join-column capability.
#[derive(Debug, Clone, Default)]
pub struct AddendumBTable {
    pub records: Vec<AddendumBRecord>,
    pub has_hcpcs_code: bool,
}

fn cell(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|idx| row.get(idx))
        .cloned()
        .unwrap_or_default()
}

fn extra_columns(
    normalized: &NormalizedTable,
    canonical: &BTreeSet<&str>,
) -> Vec<(usize, String)> {
    normalized
        .table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !canonical.contains(header.as_str()))
        .map(|(idx, header)| (idx, header.clone()))
        .collect()
}

fn extras_for_row(row: &[String], columns: &[(usize, String)]) -> BTreeMap<String, String> {
    columns
        .iter()
        .map(|(idx, header)| (header.clone(), cell(row, Some(*idx))))
        .collect()
}

/// Build typed procedure records from a normalized HCPCS table.
pub fn build_procedure_table(normalized: &NormalizedTable) -> ProcedureTable {
    debug_assert_eq!(normalized.source, SourceKind::Hcpcs);
    let canonical: BTreeSet<&str> = SourceKind::Hcpcs.required_columns().iter().copied().collect();
    let extra = extra_columns(normalized, &canonical);
    let table = &normalized.table;
    let seqnum = table.column_index("SEQNUM");
    let hcpc = table.column_index("HCPC");
    let opps = table.column_index("OPPS");
    let long_description = table.column_index("LONG_DESCRIPTION");
    let short_description = table.column_index("SHORT_DESCRIPTION");
    let records = table
        .rows
        .iter()
        .map(|row| ProcedureRecord {
            seqnum: cell(row, seqnum),
            hcpc: cell(row, hcpc),
            opps: cell(row, opps),
            long_description: cell(row, long_description),
            short_description: cell(row, short_description),
            extra: extras_for_row(row, &extra),
        })
        .collect();
    ProcedureTable {
        records,
        has_seqnum: seqnum.is_some(),
        has_hcpc: hcpc.is_some(),
        has_opps: opps.is_some(),
    }
}

/// Build typed Addendum A records from a normalized table.
pub fn build_addendum_a_table(normalized: &NormalizedTable) -> AddendumATable {
    debug_assert_eq!(normalized.source, SourceKind::AddendumA);
    let canonical: BTreeSet<&str> = SourceKind::AddendumA
        .required_columns()
        .iter()
        .copied()
        .collect();
    let extra = extra_columns(normalized, &canonical);
    let table = &normalized.table;
    let apc = table.column_index("APC");
    let group_title = table.column_index("Group_Title");
    let relative_weight = table.column_index("Relative_Weight");
    let payment_rate = table.column_index("Payment_Rate");
    let records = table
        .rows
        .iter()
        .map(|row| AddendumARecord {
            apc: cell(row, apc),
            group_title: cell(row, group_title),
            relative_weight: cell(row, relative_weight),
            payment_rate: cell(row, payment_rate),
            extra: extras_for_row(row, &extra),
        })
        .collect();
    AddendumATable {
        records,
        has_apc: apc.is_some(),
    }
}

/// Build typed Addendum B records from a normalized table.
pub fn build_addendum_b_table(normalized: &NormalizedTable) -> AddendumBTable {
    debug_assert_eq!(normalized.source, SourceKind::AddendumB);
    let canonical: BTreeSet<&str> = SourceKind::AddendumB
        .required_columns()
        .iter()
        .copied()
        .collect();
    let extra = extra_columns(normalized, &canonical);
    let table = &normalized.table;
    let hcpcs_code = table.column_index("HCPCS_Code");
    let short_descriptor = table.column_index("Short_Descriptor");
    let relative_weight = table.column_index("Relative_Weight");
    let payment_rate = table.column_index("Payment_Rate");
    let records = table
        .rows
        .iter()
        .map(|row| AddendumBRecord {
            hcpcs_code: cell(row, hcpcs_code),
            short_descriptor: cell(row, short_descriptor),
            relative_weight: cell(row, relative_weight),
            payment_rate: cell(row, payment_rate),
            extra: extras_for_row(row, &extra),
        })
        .collect();
    AddendumBTable {
        records,
        has_hcpcs_code: hcpcs_code.is_some(),
    }
}
