//! Mapping pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the three delimited tables and the concept catalog
//! 2. **Normalize**: rename vendor columns onto the canonical sets, report
//!    missing columns, build typed records with capability flags
//! 3. **Map**: enrich every concept with its three mapping lists
//! 4. **Output**: atomically publish the enriched catalog as nested JSON
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. Fatal errors abort the run; schema mismatches only warn.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use oppsmap_ingest::{CsvTable, read_concept_catalog, read_csv_table};
use oppsmap_map::{
    AddendumATable, AddendumBTable, ProcedureTable, build_addendum_a_table,
    build_addendum_b_table, build_procedure_table, normalize,
};
use oppsmap_model::{ConceptCatalog, SchemaReport, SourceKind};
use oppsmap_report::write_mapped_catalog;
use oppsmap_transform::map_concepts;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// The four configured input paths.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub hcpcs: PathBuf,
    pub addendum_a: PathBuf,
    pub addendum_b: PathBuf,
    pub concepts: PathBuf,
}

/// Result of the ingest stage: raw tables plus the concept catalog.
#[derive(Debug)]
pub struct IngestResult {
    pub hcpcs: CsvTable,
    pub addendum_a: CsvTable,
    pub addendum_b: CsvTable,
    pub catalog: ConceptCatalog,
}

/// Read all four sources into memory.
///
/// Any unreadable source aborts the run before mapping starts; no partial
/// output is ever produced from a partial ingest.
pub fn ingest(paths: &SourcePaths) -> Result<IngestResult> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();

    let hcpcs = read_csv_table(&paths.hcpcs, SourceKind::Hcpcs.skip_rows())
        .with_context(|| format!("read {}", paths.hcpcs.display()))?;
    let addendum_a = read_csv_table(&paths.addendum_a, SourceKind::AddendumA.skip_rows())
        .with_context(|| format!("read {}", paths.addendum_a.display()))?;
    let addendum_b = read_csv_table(&paths.addendum_b, SourceKind::AddendumB.skip_rows())
        .with_context(|| format!("read {}", paths.addendum_b.display()))?;
    let catalog = read_concept_catalog(&paths.concepts)
        .with_context(|| format!("read {}", paths.concepts.display()))?;

    info!(
        hcpcs_rows = hcpcs.rows.len(),
        addendum_a_rows = addendum_a.rows.len(),
        addendum_b_rows = addendum_b.rows.len(),
        concepts = catalog.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        hcpcs,
        addendum_a,
        addendum_b,
        catalog,
    })
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage: typed tables plus schema reports.
#[derive(Debug)]
pub struct NormalizeResult {
    pub procedures: ProcedureTable,
    pub addendum_a: AddendumATable,
    pub addendum_b: AddendumBTable,
    /// One report per tabular source, in pipeline order.
    pub reports: Vec<SchemaReport>,
}

/// Rename vendor columns onto the canonical sets and build typed records.
///
/// Missing required columns are reported, never fatal; the affected join
/// steps later yield empty results.
pub fn normalize_sources(ingested: &IngestResult) -> NormalizeResult {
    let span = info_span!("normalize");
    let _guard = span.enter();
    let start = Instant::now();

    let hcpcs = normalize(SourceKind::Hcpcs, &ingested.hcpcs);
    let addendum_a = normalize(SourceKind::AddendumA, &ingested.addendum_a);
    let addendum_b = normalize(SourceKind::AddendumB, &ingested.addendum_b);

    let procedures = build_procedure_table(&hcpcs);
    let addendum_a_table = build_addendum_a_table(&addendum_a);
    let addendum_b_table = build_addendum_b_table(&addendum_b);

    let reports = vec![hcpcs.report, addendum_a.report, addendum_b.report];
    let missing_total: usize = reports.iter().map(|report| report.missing.len()).sum();
    info!(
        missing_columns = missing_total,
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    NormalizeResult {
        procedures,
        addendum_a: addendum_a_table,
        addendum_b: addendum_b_table,
        reports,
    }
}

// ============================================================================
// Stage 3: Map
// ============================================================================

/// Result of the map stage: the enriched catalog plus link counts.
#[derive(Debug)]
pub struct MapStageResult {
    pub catalog: ConceptCatalog,
    pub matched_concepts: usize,
    pub procedure_links: usize,
    pub addendum_a_links: usize,
    pub addendum_b_links: usize,
}

/// Enrich every concept with its three mapping lists.
pub fn map_stage(catalog: ConceptCatalog, normalized: &NormalizeResult) -> MapStageResult {
    let span = info_span!("map");
    let _guard = span.enter();
    let start = Instant::now();

    let catalog = map_concepts(
        catalog,
        &normalized.procedures,
        &normalized.addendum_a,
        &normalized.addendum_b,
    );

    let matched_concepts = catalog
        .concept
        .iter()
        .filter(|concept| concept.has_mappings())
        .count();
    let procedure_links: usize = catalog
        .concept
        .iter()
        .map(|concept| concept.hcpcs_mappings.len())
        .sum();
    let addendum_a_links: usize = catalog
        .concept
        .iter()
        .map(|concept| concept.addendum_a_mappings.len())
        .sum();
    let addendum_b_links: usize = catalog
        .concept
        .iter()
        .map(|concept| concept.addendum_b_mappings.len())
        .sum();

    info!(
        concepts = catalog.len(),
        matched_concepts,
        procedure_links,
        addendum_a_links,
        addendum_b_links,
        duration_ms = start.elapsed().as_millis(),
        "map complete"
    );
    MapStageResult {
        catalog,
        matched_concepts,
        procedure_links,
        addendum_a_links,
        addendum_b_links,
    }
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Publish the enriched catalog, or skip it entirely on a dry run.
///
/// Writing is all-or-nothing; a failure leaves no partial file behind.
pub fn output(path: &Path, catalog: &ConceptCatalog, dry_run: bool) -> Result<Option<PathBuf>> {
    let span = info_span!("output");
    let _guard = span.enter();
    let start = Instant::now();

    if dry_run {
        info!(
            concepts = catalog.len(),
            duration_ms = start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    let written = write_mapped_catalog(path, catalog)
        .with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %written.display(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(written))
}
