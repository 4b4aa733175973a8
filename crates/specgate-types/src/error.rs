use thiserror::Error;

/// Errors raised while constructing or loading a specification.
///
/// These are fatal to spec creation: a spec that fails here never reaches
/// verification.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("ExecutionScope.{field} must be > 0")]
    NonPositiveBound { field: &'static str },

    #[error("invalid JSON specification: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML specification: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_error_names_field() {
        let err = SpecError::NonPositiveBound {
            field: "timeout_seconds",
        };
        assert_eq!(err.to_string(), "ExecutionScope.timeout_seconds must be > 0");
    }
}
