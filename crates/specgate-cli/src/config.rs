//! CLI configuration file

use std::path::Path;

use serde::{Deserialize, Serialize};
use specgate_verify::RiskConfig;

use crate::error::{CliError, CliResult};

/// Contents of the optional TOML config file.
///
/// ```toml
/// log_filter = "specgate_runtime=debug"
///
/// [risk]
/// safe_iterations = 500
///
/// [risk.weights]
/// large_data_size = 0.4
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    pub risk: RiskConfig,
}

impl CliConfig {
    /// Load from `path`. No path yields defaults. A path that does not exist
    /// is an error when `must_exist` is set (given on the command line) and
    /// yields defaults otherwise (taken from the environment).
    pub fn load(path: Option<&Path>, must_exist: bool) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !must_exist && !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
