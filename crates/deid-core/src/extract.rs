//! Extraction orchestration.

use tracing::info;

use deid_model::error::Result;
use deid_model::{ConfigNode, DeidInfo};

use crate::table::process_table;
use crate::traversal::visit_dataset_sections;

/// Builds the full [`DeidInfo`] for a configuration tree.
///
/// Configuration errors from table processing propagate unmodified and
/// abort the run; no partial result is returned.
pub fn extract(config: &ConfigNode) -> Result<DeidInfo> {
    let mut info = DeidInfo::new();
    visit_dataset_sections(config, &mut |dataset_name, tables| {
        for node in tables {
            process_table(&mut info, dataset_name, node)?;
        }
        Ok(())
    })?;
    info!(table_count = info.len(), "extraction complete");
    Ok(info)
}
