#![deny(unsafe_code)]

pub mod loaders;

pub use loaders::{
    default_standards_root, load_dataset_templates, load_default_dataset_templates,
    load_default_operation_catalog, load_operation_catalog,
};
