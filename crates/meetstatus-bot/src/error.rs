//! Error types for the CLI.

use thiserror::Error;

use meetstatus_core::TracingError;
use meetstatus_providers::StatusError;

/// Result type for CLI operations.
pub type BotResult<T> = Result<T, BotError>;

/// Errors surfaced at the outer seam.
///
/// The query pipeline itself fails fast; this is where its failure is
/// caught, logged, and turned into a non-zero exit.
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration file could not be read or parsed, or is incomplete.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing initialization failed.
    #[error(transparent)]
    Tracing(#[from] TracingError),

    /// The status query failed at some stage.
    #[error(transparent)]
    Query(#[from] StatusError),
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The merged configuration is unusable.
    #[error("{0}")]
    Invalid(String),
}
