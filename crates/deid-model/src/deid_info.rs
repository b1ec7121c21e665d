use std::collections::BTreeMap;

/// Reserved operation label marking a column as explicitly exempt from DEID.
pub const COL_NO_DEID: &str = "col_no_deid";

/// Report cell marker for a column with no entry in a dataset. Distinct from
/// [`COL_NO_DEID`]: absence of configuration, not explicit exemption.
pub const NOT_APPLICABLE: &str = "N/A";

/// Accumulated extraction result.
///
/// Maps `table_id` → `dataset_name` (uppercased) → `column_id` (lowercased,
/// the canonical key) → operation label. Built once per extraction run and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeidInfo {
    tables: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
}

impl DeidInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column map for `(table_id, dataset_name)`, created empty on first
    /// access. Registering the pair even without columns keeps every table
    /// seen under a dataset section present in the result.
    pub fn columns_mut(
        &mut self,
        table_id: &str,
        dataset_name: &str,
    ) -> &mut BTreeMap<String, String> {
        self.tables
            .entry(table_id.to_string())
            .or_default()
            .entry(dataset_name.to_string())
            .or_default()
    }

    pub fn tables(&self) -> &BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>> {
        &self.tables
    }

    pub fn table(&self, table_id: &str) -> Option<&BTreeMap<String, BTreeMap<String, String>>> {
        self.tables.get(table_id)
    }

    /// Operation label recorded for a column, if any.
    pub fn operation(&self, table_id: &str, dataset_name: &str, column_id: &str) -> Option<&str> {
        self.tables
            .get(table_id)?
            .get(dataset_name)?
            .get(column_id)
            .map(String::as_str)
    }

    pub fn table_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_mut_creates_nested_levels() {
        let mut info = DeidInfo::new();
        info.columns_mut("PERSON", "N3C_DEID_TEMPLATE")
            .insert("birth_date".to_string(), COL_NO_DEID.to_string());

        assert_eq!(info.len(), 1);
        assert_eq!(
            info.operation("PERSON", "N3C_DEID_TEMPLATE", "birth_date"),
            Some(COL_NO_DEID)
        );
        assert_eq!(info.operation("PERSON", "DEID_TEMPLATE", "birth_date"), None);
    }

    #[test]
    fn empty_dataset_entry_still_registers_table() {
        let mut info = DeidInfo::new();
        info.columns_mut("OBSERVATION", "DEID_TEMPLATE");

        assert!(info.table("OBSERVATION").is_some());
        assert_eq!(info.table_ids().collect::<Vec<_>>(), vec!["OBSERVATION"]);
    }

    #[test]
    fn table_ids_iterate_sorted() {
        let mut info = DeidInfo::new();
        info.columns_mut("VISIT", "DEID_TEMPLATE");
        info.columns_mut("DEATH", "DEID_TEMPLATE");
        info.columns_mut("PERSON", "DEID_TEMPLATE");

        let ids: Vec<_> = info.table_ids().collect();
        assert_eq!(ids, vec!["DEATH", "PERSON", "VISIT"]);
    }
}
