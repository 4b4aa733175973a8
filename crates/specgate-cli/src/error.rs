//! CLI error types

use std::path::PathBuf;

use specgate_types::SpecError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// A spec or config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`CliConfig`](crate::config::CliConfig)
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The spec file failed to parse or carries an invalid bound
    #[error("invalid spec file {path}: {source}")]
    Spec { path: PathBuf, source: SpecError },

    /// Spec file extension is not `.json`, `.yaml` or `.yml`
    #[error("unsupported spec file extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// JSON rendering of a report failed
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// TOML rendering of the effective config failed
    #[error("failed to render config: {0}")]
    RenderConfig(#[from] toml::ser::Error),
}
