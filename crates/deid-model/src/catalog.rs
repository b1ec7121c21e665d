use serde::{Deserialize, Serialize};

/// One row of the static DEID operation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub description: String,
}

/// One of the fixed dataset templates the report renders a column for.
///
/// The template list order is the report column order and the tie-break
/// order for display casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetTemplate {
    pub name: String,
    pub display_label: String,
}

impl DatasetTemplate {
    pub fn new(name: impl Into<String>, display_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_label: display_label.into(),
        }
    }
}
