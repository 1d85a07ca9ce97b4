//! Error types.

use thiserror::Error;

/// Why the wizard refused a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeadError {
    /// The wizard already handed this lead to a sink.
    #[error("lead was already submitted")]
    AlreadySubmitted,
}

/// Site configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML source is malformed or has wrongly typed values.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}
