pub mod catalog;
pub mod config;
pub mod deid_info;
pub mod error;
pub mod table;

pub use catalog::{DatasetTemplate, OperationInfo};
pub use config::{ConfigNode, TABLES_TO_DEID};
pub use deid_info::{COL_NO_DEID, DeidInfo, NOT_APPLICABLE};
pub use error::{ConfigError, Result};
pub use table::{ColumnExemption, ColumnOperation, TableConfig};
