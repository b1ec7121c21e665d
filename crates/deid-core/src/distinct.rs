//! Distinct operation labels used across a result.

use std::collections::BTreeSet;

use deid_model::DeidInfo;

/// Returns every distinct operation label appearing in `info`, the
/// exemption sentinel included. Informational only; nothing cross-checks
/// this against the static catalog.
pub fn distinct_operations(info: &DeidInfo) -> BTreeSet<String> {
    info.tables()
        .values()
        .flat_map(|datasets| datasets.values())
        .flat_map(|columns| columns.values())
        .cloned()
        .collect()
}
