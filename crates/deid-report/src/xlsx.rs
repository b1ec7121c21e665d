//! XLSX workbook rendering.
//!
//! The workbook opens with a catalog sheet of known DEID operations, then
//! one read-only sheet per table. Only the catalog's Description column is
//! left editable for reviewer notes.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, ProtectionOptions, Workbook, Worksheet, XlsxError,
};
use tracing::info;

use deid_model::{DatasetTemplate, OperationInfo};

use crate::matrix::ReportMatrix;

const CATALOG_SHEET_NAME: &str = "DEID Operations";
const HEADER_FILL: u32 = 0x4472C4;
const MAX_COLUMN_WIDTH: f64 = 50.0;

struct SheetStyles {
    header: Format,
    body: Format,
    body_unlocked: Format,
}

fn define_styles() -> SheetStyles {
    let header = Format::new()
        .set_font_name("Calibri")
        .set_font_size(12)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);
    let body = Format::new()
        .set_font_name("Calibri")
        .set_font_size(11)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);
    let body_unlocked = body.clone().set_unlocked();
    SheetStyles {
        header,
        body,
        body_unlocked,
    }
}

fn sheet_protection() -> ProtectionOptions {
    ProtectionOptions {
        format_columns: true,
        format_rows: true,
        sort: true,
        use_autofilter: true,
        ..ProtectionOptions::default()
    }
}

/// Writes the full report workbook to `path`.
pub fn write_report(
    path: &Path,
    catalog: &[OperationInfo],
    matrices: &[ReportMatrix],
    templates: &[DatasetTemplate],
) -> Result<()> {
    let styles = define_styles();
    let mut workbook = Workbook::new();

    write_catalog_sheet(workbook.add_worksheet(), catalog, &styles)
        .with_context(|| format!("write sheet '{CATALOG_SHEET_NAME}'"))?;

    for matrix in matrices {
        write_table_sheet(workbook.add_worksheet(), matrix, templates, &styles)
            .with_context(|| format!("write sheet '{}'", matrix.table_id))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("save workbook: {}", path.display()))?;
    info!(
        path = %path.display(),
        sheet_count = matrices.len() + 1,
        "report workbook written"
    );
    Ok(())
}

fn write_catalog_sheet(
    worksheet: &mut Worksheet,
    catalog: &[OperationInfo],
    styles: &SheetStyles,
) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(CATALOG_SHEET_NAME)?;
    worksheet.write_string_with_format(0, 0, "Operation", &styles.header)?;
    worksheet.write_string_with_format(0, 1, "Description", &styles.header)?;

    let mut widths = ["Operation".len(), "Description".len()];
    for (index, operation) in catalog.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string_with_format(row, 0, &operation.name, &styles.body)?;
        worksheet.write_string_with_format(row, 1, &operation.description, &styles.body_unlocked)?;
        widths[0] = widths[0].max(operation.name.chars().count());
        widths[1] = widths[1].max(operation.description.chars().count());
    }

    worksheet.set_column_width(0, (widths[0] + 2) as f64)?;
    worksheet.set_column_width(1, (widths[1] + 2) as f64)?;
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.protect_with_options(&sheet_protection());
    Ok(())
}

fn write_table_sheet(
    worksheet: &mut Worksheet,
    matrix: &ReportMatrix,
    templates: &[DatasetTemplate],
    styles: &SheetStyles,
) -> std::result::Result<(), XlsxError> {
    worksheet.set_name(&matrix.table_id)?;

    let mut widths: Vec<usize> = Vec::with_capacity(templates.len() + 1);
    worksheet.write_string_with_format(0, 0, "Column", &styles.header)?;
    widths.push("Column".len());
    for (index, template) in templates.iter().enumerate() {
        worksheet.write_string_with_format(0, index as u16 + 1, &template.display_label, &styles.header)?;
        widths.push(template.display_label.chars().count());
    }

    for (row_index, row) in matrix.rows.iter().enumerate() {
        let row_number = row_index as u32 + 1;
        worksheet.write_string_with_format(row_number, 0, &row.column, &styles.body)?;
        widths[0] = widths[0].max(row.column.chars().count());
        for (cell_index, cell) in row.cells.iter().enumerate() {
            worksheet.write_string_with_format(row_number, cell_index as u16 + 1, cell, &styles.body)?;
            widths[cell_index + 1] = widths[cell_index + 1].max(cell.chars().count());
        }
    }

    for (index, width) in widths.iter().enumerate() {
        let scaled = ((width + 2) as f64 * 1.2).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(index as u16, scaled)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.protect_with_options(&sheet_protection());
    Ok(())
}
