use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use deid_model::{DatasetTemplate, OperationInfo};

const STANDARDS_ENV_VAR: &str = "DEID_STANDARDS_DIR";
const OPERATIONS_FILE: &str = "etl_operations.csv";
const TEMPLATES_FILE: &str = "dataset_templates.csv";

/// Root directory of the static registries.
///
/// `DEID_STANDARDS_DIR` overrides the workspace-relative default.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

pub fn load_default_operation_catalog() -> Result<Vec<OperationInfo>> {
    load_operation_catalog(&default_standards_root().join(OPERATIONS_FILE))
}

pub fn load_default_dataset_templates() -> Result<Vec<DatasetTemplate>> {
    load_dataset_templates(&default_standards_root().join(TEMPLATES_FILE))
}

/// Loads the DEID operation catalog (operation name → description).
///
/// The catalog is informational: report consumers read it on the first
/// sheet, but nothing cross-checks it against the configured operations.
pub fn load_operation_catalog(path: &Path) -> Result<Vec<OperationInfo>> {
    let mut operations = Vec::new();
    for (index, record) in read_csv_records(path)?.into_iter().enumerate() {
        let name = field(&record, 0);
        if name.is_empty() {
            bail!(
                "operation catalog {} row {} has an empty operation name",
                path.display(),
                index + 1
            );
        }
        operations.push(OperationInfo {
            name,
            description: field(&record, 1),
        });
    }
    Ok(operations)
}

/// Loads the fixed dataset-template list.
///
/// File order is significant: it is the report column order and the
/// tie-break order for display casing.
pub fn load_dataset_templates(path: &Path) -> Result<Vec<DatasetTemplate>> {
    let mut templates = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for (index, record) in read_csv_records(path)?.into_iter().enumerate() {
        let name = field(&record, 0);
        if name.is_empty() {
            bail!(
                "dataset template registry {} row {} has an empty dataset name",
                path.display(),
                index + 1
            );
        }
        if !seen.insert(name.clone()) {
            bail!(
                "dataset template registry {} lists `{name}` more than once",
                path.display()
            );
        }
        let display_label = field(&record, 1);
        templates.push(DatasetTemplate {
            name,
            display_label,
        });
    }
    if templates.is_empty() {
        bail!("dataset template registry {} is empty", path.display());
    }
    Ok(templates)
}

fn read_csv_records(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("read registry: {}", path.display()))?;
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.with_context(|| format!("read record: {}", path.display()))?);
    }
    Ok(records)
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").trim().to_string()
}
