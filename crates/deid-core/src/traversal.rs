//! Recursive dataset-section discovery over the configuration tree.

use tracing::{debug, trace};

use deid_model::error::Result;
use deid_model::{ConfigError, ConfigNode, TABLES_TO_DEID};

/// Walks the tree and invokes `visit` once per dataset section.
///
/// A mapping node containing the `tables_to_deid` key is a dataset section:
/// the key immediately enclosing it, uppercased, is the dataset name, and
/// the section's tables are handed to `visit`. Every other mapping is
/// recursed into, at any depth. Non-mapping values are ignored.
///
/// The dataset name is the immediate parent key only; nesting depth does not
/// produce composite names, and two branches using the same key end up in
/// the same dataset bucket.
pub fn visit_dataset_sections<F>(root: &ConfigNode, visit: &mut F) -> Result<()>
where
    F: FnMut(&str, &[ConfigNode]) -> Result<()>,
{
    let Some(entries) = root.as_mapping() else {
        return Ok(());
    };
    for (key, value) in entries {
        visit_section(key, value, visit)?;
    }
    Ok(())
}

fn visit_section<F>(name: &str, node: &ConfigNode, visit: &mut F) -> Result<()>
where
    F: FnMut(&str, &[ConfigNode]) -> Result<()>,
{
    let Some(entries) = node.as_mapping() else {
        trace!(section = name, "skipping non-mapping value");
        return Ok(());
    };

    if let Some(tables) = node.get(TABLES_TO_DEID) {
        let dataset_name = name.to_uppercase();
        let tables = tables.as_list().ok_or_else(|| {
            ConfigError::unexpected_shape(
                "a list",
                format!("`{TABLES_TO_DEID}` under dataset section {dataset_name}"),
            )
        })?;
        debug!(dataset = %dataset_name, table_count = tables.len(), "dataset section found");
        return visit(&dataset_name, tables);
    }

    for (key, value) in entries {
        visit_section(key, value, visit)?;
    }
    Ok(())
}
