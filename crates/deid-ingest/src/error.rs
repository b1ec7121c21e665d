use std::path::PathBuf;

use thiserror::Error;

/// Failures locating or parsing the input configuration.
///
/// Any of these aborts the run before extraction starts; no partial
/// extraction is attempted from a malformed source.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML configuration {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported configuration structure in {path}: {message}")]
    UnsupportedStructure { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
