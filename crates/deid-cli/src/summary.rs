use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deid_cli::pipeline::ReportOutcome;

pub fn print_summary(outcome: &ReportOutcome) {
    println!("Configuration: {}", outcome.config.display());
    println!("Workbook: {}", outcome.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Columns"),
        header_cell("Assigned"),
        header_cell("Exempt"),
        header_cell("N/A"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_columns = 0usize;
    let mut total_assigned = 0usize;
    let mut total_exempt = 0usize;
    let mut total_na = 0usize;
    for summary in &outcome.tables {
        total_columns += summary.columns;
        total_assigned += summary.assigned;
        total_exempt += summary.exempt;
        total_na += summary.not_applicable;
        table.add_row(vec![
            Cell::new(&summary.table_id),
            Cell::new(summary.columns),
            Cell::new(summary.assigned),
            Cell::new(summary.exempt),
            Cell::new(summary.not_applicable),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_columns).add_attribute(Attribute::Bold),
        Cell::new(total_assigned).add_attribute(Attribute::Bold),
        Cell::new(total_exempt).add_attribute(Attribute::Bold),
        Cell::new(total_na).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Distinct operations in use: {}", outcome.distinct_operations);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
