//! Per-table merge of column assignments into the shared result.

use tracing::trace;

use deid_model::error::Result;
use deid_model::{COL_NO_DEID, ConfigNode, DeidInfo, TableConfig};

/// Merges one raw table entry into `info` under `dataset_name`.
///
/// Operations are applied first and exemptions second, both with plain
/// overwrite on the lowercased column id, so a column listed in both lists
/// always ends up exempt. The (table, dataset) pair is registered even when
/// both lists are empty.
pub fn process_table(info: &mut DeidInfo, dataset_name: &str, node: &ConfigNode) -> Result<()> {
    let table = TableConfig::from_node(node, dataset_name)?;
    let columns = info.columns_mut(&table.table_id, dataset_name);

    for operation in &table.col_deid_operations {
        columns.insert(operation.col_id.to_lowercase(), operation.op_name.clone());
    }
    for exemption in &table.col_no_deid {
        columns.insert(exemption.col_id.to_lowercase(), COL_NO_DEID.to_string());
    }

    trace!(
        table_id = %table.table_id,
        dataset = dataset_name,
        column_count = columns.len(),
        "table merged"
    );
    Ok(())
}
