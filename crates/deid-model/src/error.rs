use thiserror::Error;

/// Structural violations in the input configuration.
///
/// Any of these is fatal to the whole extraction run; there is no
/// partial-table recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required key `{key}` in {context}")]
    MissingKey { key: String, context: String },

    #[error("expected {expected} for {context}")]
    UnexpectedShape { expected: String, context: String },
}

impl ConfigError {
    pub fn missing_key(key: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingKey {
            key: key.into(),
            context: context.into(),
        }
    }

    pub fn unexpected_shape(expected: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            expected: expected.into(),
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
