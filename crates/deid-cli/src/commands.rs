use anyhow::{Context, Result};
use comfy_table::Table;

use deid_cli::pipeline::{ReportOutcome, generate_report};
use deid_standards::load_default_operation_catalog;

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    generate_report(&args.config, &args.output)
}

pub fn run_operations() -> Result<()> {
    let catalog = load_default_operation_catalog().context("load operation catalog")?;
    let mut table = Table::new();
    table.set_header(vec!["Operation", "Description"]);
    apply_table_style(&mut table);
    for operation in catalog {
        table.add_row(vec![
            operation.name,
            display_description(&operation.description),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Catalog descriptions use `<br>` separators for the workbook; break them
/// into real lines for the terminal.
fn display_description(description: &str) -> String {
    description.replace("<br>", "\n")
}
