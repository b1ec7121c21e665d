//! Report matrix construction.

use std::collections::BTreeMap;

use serde::Serialize;

use deid_model::{DatasetTemplate, DeidInfo, NOT_APPLICABLE};

/// One rendered row: a display column name plus one cell per dataset
/// template, in template order. A cell is an operation label, the exemption
/// sentinel, or `N/A` when the dataset has no entry for the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub column: String,
    pub cells: Vec<String>,
}

/// The rendered matrix for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMatrix {
    pub table_id: String,
    pub rows: Vec<ReportRow>,
}

impl ReportMatrix {
    pub fn row(&self, column: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.column == column)
    }
}

/// Builds one matrix per table, tables in lexicographic order.
pub fn build_matrices(info: &DeidInfo, templates: &[DatasetTemplate]) -> Vec<ReportMatrix> {
    info.tables()
        .iter()
        .map(|(table_id, datasets)| build_matrix(table_id, datasets, templates))
        .collect()
}

/// Builds the matrix for one table.
///
/// The row universe is the union of columns recorded under the fixed
/// template list. The display form of a column is decided by the last
/// template in list order that mentions it (plain overwrite while
/// collecting), and rows are sorted by display name.
pub fn build_matrix(
    table_id: &str,
    datasets: &BTreeMap<String, BTreeMap<String, String>>,
    templates: &[DatasetTemplate],
) -> ReportMatrix {
    let mut display_names: BTreeMap<String, String> = BTreeMap::new();
    for template in templates {
        if let Some(columns) = datasets.get(&template.name) {
            for column in columns.keys() {
                display_names.insert(column.to_lowercase(), column.clone());
            }
        }
    }

    let mut rows: Vec<ReportRow> = display_names
        .iter()
        .map(|(column_id, display)| {
            let cells = templates
                .iter()
                .map(|template| {
                    datasets
                        .get(&template.name)
                        .and_then(|columns| columns.get(column_id))
                        .cloned()
                        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
                })
                .collect();
            ReportRow {
                column: display.clone(),
                cells,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.column.cmp(&b.column));

    ReportMatrix {
        table_id: table_id.to_string(),
        rows,
    }
}
