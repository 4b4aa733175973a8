//! CLI command implementations

pub mod demo;
pub mod explain;
pub mod verify;

use std::path::Path;

use specgate_types::AuthorizationSpec;

use crate::error::{CliError, CliResult};

/// Load a spec from a `.json`, `.yaml` or `.yml` file.
pub fn load_spec(path: &Path) -> CliResult<AuthorizationSpec> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match extension.as_deref() {
        Some("json") => AuthorizationSpec::from_json_str(&contents),
        Some("yaml") | Some("yml") => AuthorizationSpec::from_yaml_str(&contents),
        _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
    };

    parsed.map_err(|source| CliError::Spec {
        path: path.to_path_buf(),
        source,
    })
}
