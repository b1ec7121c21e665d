//! Report pipeline stages shared by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use deid_core::{distinct_operations, extract};
use deid_ingest::load_config;
use deid_model::{COL_NO_DEID, NOT_APPLICABLE};
use deid_report::{ReportMatrix, build_matrices, write_report};
use deid_standards::{load_default_dataset_templates, load_default_operation_catalog};

/// Per-table cell counts for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub table_id: String,
    pub columns: usize,
    pub assigned: usize,
    pub exempt: usize,
    pub not_applicable: usize,
}

/// Outcome of a successful report run.
#[derive(Debug)]
pub struct ReportOutcome {
    pub config: PathBuf,
    pub output: PathBuf,
    pub tables: Vec<TableSummary>,
    pub distinct_operations: usize,
}

/// Runs the full pipeline: load the configuration, extract DEID info,
/// build the per-table matrices, render the workbook.
///
/// Any stage failure aborts the run before the workbook is written.
pub fn generate_report(config_path: &Path, output_path: &Path) -> Result<ReportOutcome> {
    let load_span = info_span!("load", config = %config_path.display());
    let load_start = Instant::now();
    let config = load_span.in_scope(|| load_config(config_path))?;
    info!(
        config = %config_path.display(),
        duration_ms = load_start.elapsed().as_millis(),
        "configuration loaded"
    );

    let extract_span = info_span!("extract");
    let info = extract_span.in_scope(|| extract(&config))?;
    let distinct = distinct_operations(&info);
    info!(
        table_count = info.len(),
        operation_count = distinct.len(),
        "deid info extracted"
    );

    let catalog = load_default_operation_catalog().context("load operation catalog")?;
    let templates = load_default_dataset_templates().context("load dataset templates")?;

    let render_span = info_span!("render", output = %output_path.display());
    let render_start = Instant::now();
    let matrices = build_matrices(&info, &templates);
    render_span.in_scope(|| write_report(output_path, &catalog, &matrices, &templates))?;
    info!(
        sheet_count = matrices.len() + 1,
        duration_ms = render_start.elapsed().as_millis(),
        "workbook rendered"
    );

    let tables = matrices.iter().map(summarize_table).collect();
    Ok(ReportOutcome {
        config: config_path.to_path_buf(),
        output: output_path.to_path_buf(),
        tables,
        distinct_operations: distinct.len(),
    })
}

fn summarize_table(matrix: &ReportMatrix) -> TableSummary {
    let mut assigned = 0;
    let mut exempt = 0;
    let mut not_applicable = 0;
    for row in &matrix.rows {
        for cell in &row.cells {
            if cell == COL_NO_DEID {
                exempt += 1;
            } else if cell == NOT_APPLICABLE {
                not_applicable += 1;
            } else {
                assigned += 1;
            }
        }
    }
    TableSummary {
        table_id: matrix.table_id.clone(),
        columns: matrix.rows.len(),
        assigned,
        exempt,
        not_applicable,
    }
}
