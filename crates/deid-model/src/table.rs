use serde::{Deserialize, Serialize};

use crate::config::ConfigNode;
use crate::error::{ConfigError, Result};

/// One `col_deid_operations` entry: a column and the operation applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOperation {
    pub col_id: String,
    pub op_name: String,
}

/// One `col_no_deid` entry: a column explicitly exempted from DEID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnExemption {
    pub col_id: String,
}

/// Typed view of one table entry under `tables_to_deid`.
///
/// Both operation lists are optional in the source; absence means empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub table_id: String,
    #[serde(default)]
    pub col_deid_operations: Vec<ColumnOperation>,
    #[serde(default)]
    pub col_no_deid: Vec<ColumnExemption>,
}

impl TableConfig {
    /// Validates a raw table entry into the typed model.
    ///
    /// Missing required keys (`table_id`, `col_id`, `op_name`) and shape
    /// violations surface as [`ConfigError`], naming the key and the
    /// dataset/table they were found under.
    pub fn from_node(node: &ConfigNode, dataset_name: &str) -> Result<Self> {
        if node.as_mapping().is_none() {
            return Err(ConfigError::unexpected_shape(
                "a mapping",
                format!("table entry under dataset section {dataset_name}"),
            ));
        }

        let table_context = format!("table configuration for dataset {dataset_name}");
        let table_id = required_string(node, "table_id", &table_context)?.to_string();

        let mut col_deid_operations = Vec::new();
        if let Some(value) = node.get("col_deid_operations") {
            let entries = list_entries(value, "col_deid_operations", &table_id, dataset_name)?;
            let context = format!("deid operation entry for table {table_id} in dataset {dataset_name}");
            for entry in entries {
                col_deid_operations.push(ColumnOperation {
                    col_id: required_string(entry, "col_id", &context)?.to_string(),
                    op_name: required_string(entry, "op_name", &context)?.to_string(),
                });
            }
        }

        let mut col_no_deid = Vec::new();
        if let Some(value) = node.get("col_no_deid") {
            let entries = list_entries(value, "col_no_deid", &table_id, dataset_name)?;
            let context = format!("exempt column entry for table {table_id} in dataset {dataset_name}");
            for entry in entries {
                col_no_deid.push(ColumnExemption {
                    col_id: required_string(entry, "col_id", &context)?.to_string(),
                });
            }
        }

        Ok(Self {
            table_id,
            col_deid_operations,
            col_no_deid,
        })
    }
}

fn required_string<'a>(node: &'a ConfigNode, key: &str, context: &str) -> Result<&'a str> {
    match node.get(key) {
        None => Err(ConfigError::missing_key(key, context)),
        Some(value) => value.as_str().ok_or_else(|| {
            ConfigError::unexpected_shape("a scalar value", format!("`{key}` in {context}"))
        }),
    }
}

fn list_entries<'a>(
    value: &'a ConfigNode,
    key: &str,
    table_id: &str,
    dataset_name: &str,
) -> Result<&'a [ConfigNode]> {
    value.as_list().ok_or_else(|| {
        ConfigError::unexpected_shape(
            "a list",
            format!("`{key}` for table {table_id} in dataset {dataset_name}"),
        )
    })
}
