use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MapRunResult;

pub fn print_summary(result: &MapRunResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut sources = Table::new();
    sources.set_header(vec![
        header_cell("Source"),
        header_cell("Rows"),
        header_cell("Missing columns"),
    ]);
    apply_table_style(&mut sources);
    align_column(&mut sources, 1, CellAlignment::Right);
    for summary in &result.sources {
        let missing = if summary.missing_columns.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(summary.missing_columns.join(", ")).fg(Color::Yellow)
        };
        sources.add_row(vec![
            Cell::new(summary.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.rows),
            missing,
        ]);
    }
    println!("{sources}");

    let mut mapping = Table::new();
    mapping.set_header(vec![
        header_cell("Concepts"),
        header_cell("Matched"),
        header_cell("HCPCS links"),
        header_cell("Addendum A links"),
        header_cell("Addendum B links"),
    ]);
    apply_table_style(&mut mapping);
    for index in 0..5 {
        align_column(&mut mapping, index, CellAlignment::Right);
    }
    mapping.add_row(vec![
        Cell::new(result.concept_count),
        matched_cell(result.matched_concepts),
        Cell::new(result.procedure_links),
        Cell::new(result.addendum_a_links),
        Cell::new(result.addendum_b_links),
    ]);
    println!("{mapping}");

    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("- {warning}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn matched_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
