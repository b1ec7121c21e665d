pub mod error;
pub mod yaml;

pub use error::{IngestError, Result};
pub use yaml::load_config;
