use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use oppsmap_ingest::read_csv_table;
use oppsmap_model::SourceKind;

use crate::cli::{InspectArgs, MapArgs};
use crate::pipeline::{
    IngestResult, SourcePaths, ingest, map_stage, normalize_sources, output,
};
use crate::summary::apply_table_style;
use crate::types::{MapRunResult, SourceSummary};

pub fn run_map(args: &MapArgs) -> Result<MapRunResult> {
    let run_span = info_span!("map_run", output = %args.output.display());
    let _run_guard = run_span.enter();

    let paths = SourcePaths {
        hcpcs: args.hcpcs.clone(),
        addendum_a: args.addendum_a.clone(),
        addendum_b: args.addendum_b.clone(),
        concepts: args.concepts.clone(),
    };

    let ingested = ingest(&paths)?;
    let normalized = normalize_sources(&ingested);

    let mut sources = vec![
        SourceSummary {
            label: SourceKind::Hcpcs.label(),
            path: paths.hcpcs.clone(),
            rows: ingested.hcpcs.rows.len(),
            missing_columns: normalized.reports[0].missing.clone(),
        },
        SourceSummary {
            label: SourceKind::AddendumA.label(),
            path: paths.addendum_a.clone(),
            rows: ingested.addendum_a.rows.len(),
            missing_columns: normalized.reports[1].missing.clone(),
        },
        SourceSummary {
            label: SourceKind::AddendumB.label(),
            path: paths.addendum_b.clone(),
            rows: ingested.addendum_b.rows.len(),
            missing_columns: normalized.reports[2].missing.clone(),
        },
    ];

    let warnings: Vec<String> = normalized
        .reports
        .iter()
        .filter(|report| !report.is_clean())
        .map(|report| {
            format!(
                "{}: missing canonical columns: {}",
                report.source,
                report.missing.join(", ")
            )
        })
        .collect();

    let IngestResult { catalog, .. } = ingested;
    let concept_count = catalog.len();
    sources.push(SourceSummary {
        label: SourceKind::Concepts.label(),
        path: paths.concepts.clone(),
        rows: concept_count,
        missing_columns: Vec::new(),
    });

    let mapped = map_stage(catalog, &normalized);
    let written = output(&args.output, &mapped.catalog, args.dry_run)?;

    Ok(MapRunResult {
        output: written,
        sources,
        concept_count,
        matched_concepts: mapped.matched_concepts,
        procedure_links: mapped.procedure_links,
        addendum_a_links: mapped.addendum_a_links,
        addendum_b_links: mapped.addendum_b_links,
        warnings,
    })
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Banner rows", "Canonical columns"]);
    apply_table_style(&mut table);
    for kind in SourceKind::TABULAR.into_iter().chain([SourceKind::Concepts]) {
        table.add_row(vec![
            kind.label().to_string(),
            kind.skip_rows().to_string(),
            kind.required_columns().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let loaded = read_csv_table(&args.file, args.skip_rows)?;
    println!("File: {}", args.file.display());
    println!("Rows: {}", loaded.rows.len());
    let mut table = Table::new();
    table.set_header(vec!["#", "Column"]);
    apply_table_style(&mut table);
    for (index, header) in loaded.headers.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), header.clone()]);
    }
    println!("{table}");
    Ok(())
}
