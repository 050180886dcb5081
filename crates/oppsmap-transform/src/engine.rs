//! The three-stage join.
//!
//! For each concept, in catalog order: concept code → procedure records by
//! `SEQNUM`; the distinct `OPPS` values of those records → Addendum A rows
//! by `APC`; their `HCPC` values → Addendum B rows by `HCPCS_Code`.
//!
//! Matching is byte-for-byte string equality. No case folding, no
//! leading-zero or whitespace normalization: sources are assumed
//! pre-normalized consistently, and codes that differ only in formatting
//! will not join.
//!
//! Each concept is enriched independently of every other, with the indexes
//! read-only after construction, so the loop has no shared mutable state.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info};

use oppsmap_map::{AddendumATable, AddendumBTable, ProcedureTable};
use oppsmap_model::{Concept, ConceptCatalog};

use crate::index::KeyIndex;

/// Enrich every concept in the catalog with its three mapping lists.
///
/// Records are cloned from the loaded sources, never synthesized; concept
/// order is preserved; a join column flagged missing on its source yields
/// an empty list for every concept.
pub fn map_concepts(
    mut catalog: ConceptCatalog,
    procedures: &ProcedureTable,
    addendum_a: &AddendumATable,
    addendum_b: &AddendumBTable,
) -> ConceptCatalog {
    let seqnum_index = procedures
        .has_seqnum
        .then(|| KeyIndex::build(procedures.records.iter().map(|r| r.seqnum.as_str())));
    let apc_index = addendum_a
        .has_apc
        .then(|| KeyIndex::build(addendum_a.records.iter().map(|r| r.apc.as_str())));
    let hcpcs_index = addendum_b
        .has_hcpcs_code
        .then(|| KeyIndex::build(addendum_b.records.iter().map(|r| r.hcpcs_code.as_str())));

    let mut matched = 0usize;
    for concept in &mut catalog.concept {
        enrich_concept(
            concept,
            seqnum_index.as_ref(),
            apc_index.as_ref(),
            hcpcs_index.as_ref(),
            procedures,
            addendum_a,
            addendum_b,
        );
        if concept.has_mappings() {
            matched += 1;
        }
    }

    info!(
        concepts = catalog.len(),
        matched,
        procedures = procedures.records.len(),
        addendum_a_rows = addendum_a.records.len(),
        addendum_b_rows = addendum_b.records.len(),
        "mapping complete"
    );
    catalog
}

fn enrich_concept(
    concept: &mut Concept,
    seqnum_index: Option<&KeyIndex>,
    apc_index: Option<&KeyIndex>,
    hcpcs_index: Option<&KeyIndex>,
    procedures: &ProcedureTable,
    addendum_a: &AddendumATable,
    addendum_b: &AddendumBTable,
) {
    let matched_rows: &[usize] =
        seqnum_index.map_or(&[], |index| index.get(concept.code.as_str()));

    concept.hcpcs_mappings = matched_rows
        .iter()
        .map(|&row| procedures.records[row].clone())
        .collect();

    concept.addendum_a_mappings = match apc_index {
        Some(index) if procedures.has_opps => {
            let keys: HashSet<&str> = matched_rows
                .iter()
                .map(|&row| procedures.records[row].opps.as_str())
                .collect();
            let mut rows = BTreeSet::new();
            for key in keys {
                rows.extend(index.get(key).iter().copied());
            }
            rows.into_iter()
                .map(|row| addendum_a.records[row].clone())
                .collect()
        }
        _ => Vec::new(),
    };

    concept.addendum_b_mappings = match hcpcs_index {
        Some(index) if procedures.has_hcpc => {
            let keys: HashSet<&str> = matched_rows
                .iter()
                .map(|&row| procedures.records[row].hcpc.as_str())
                .collect();
            let mut rows = BTreeSet::new();
            for key in keys {
                rows.extend(index.get(key).iter().copied());
            }
            rows.into_iter()
                .map(|row| addendum_b.records[row].clone())
                .collect()
        }
        _ => Vec::new(),
    };

    if concept.has_mappings() {
        debug!(
            code = %concept.code,
            procedures = concept.hcpcs_mappings.len(),
            addendum_a = concept.addendum_a_mappings.len(),
            addendum_b = concept.addendum_b_mappings.len(),
            "concept enriched"
        );
    }
}
