use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Free-form schema metadata attached to inputs and actions.
///
/// Descriptive only: the gate never validates payloads against it.
pub type Schema = serde_json::Map<String, serde_json::Value>;

/// Default cumulative read budget: 1 MB.
pub const DEFAULT_MAX_DATA_SIZE: u64 = 1_000_000;

/// Default declared timeout: 5 minutes.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// A declared, permitted read source.
///
/// Identity is the pair `(source_type, source_id)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllowedInput {
    /// High-level type of the source (e.g. `database`, `file`)
    pub source_type: String,
    /// Identifier of the specific source (e.g. a table name)
    pub source_id: String,
    /// Shape of the data the source yields
    #[serde(default)]
    pub data_schema: Schema,
}

impl AllowedInput {
    pub fn new(source_type: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            source_id: source_id.into(),
            data_schema: Schema::new(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.data_schema = schema;
        self
    }

    /// Exact, case-sensitive identity match.
    pub fn matches(&self, source_type: &str, source_id: &str) -> bool {
        self.source_type == source_type && self.source_id == source_id
    }
}

/// A declared, permitted effect.
///
/// Identity is the pair `(action_type, target_type)`. The parameters schema
/// must be present even when it is empty; `None` means it was omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermittedAction {
    /// The action verb (e.g. `read`, `write`, `call`)
    pub action_type: String,
    /// The category the action applies to (e.g. `summary`, `file`)
    pub target_type: String,
    /// Expected parameters; `Some(empty)` for parameterless actions
    #[serde(default)]
    pub parameters_schema: Option<Schema>,
}

impl PermittedAction {
    /// An action with an explicit, empty parameters schema.
    pub fn new(action_type: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            target_type: target_type.into(),
            parameters_schema: Some(Schema::new()),
        }
    }

    pub fn with_parameters(mut self, schema: Schema) -> Self {
        self.parameters_schema = Some(schema);
        self
    }

    /// Exact, case-sensitive identity match.
    pub fn matches(&self, action_type: &str, target_type: &str) -> bool {
        self.action_type == action_type && self.target_type == target_type
    }
}

/// Strict bounds for one execution.
///
/// [`ExecutionScope::new`] and deserialization both reject a zero bound, so a
/// malformed scope cannot be embedded in a spec loaded from a file. The fields
/// stay public as plain data; the scope-boundedness checker audits them again
/// whatever path produced the value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExecutionScopeDef")]
pub struct ExecutionScope {
    /// Maximum number of `tick()` calls
    pub max_iterations: u64,
    /// Maximum cumulative bytes read across all inputs
    pub max_data_size: u64,
    /// Declared wall-clock budget; enforced by a supervising process
    pub timeout_seconds: u64,
    /// Resources the task may name, in sorted order
    pub allowed_resources: BTreeSet<String>,
}

impl ExecutionScope {
    pub fn new(
        max_iterations: u64,
        max_data_size: u64,
        timeout_seconds: u64,
    ) -> Result<Self, SpecError> {
        if max_iterations == 0 {
            return Err(SpecError::NonPositiveBound {
                field: "max_iterations",
            });
        }
        if max_data_size == 0 {
            return Err(SpecError::NonPositiveBound {
                field: "max_data_size",
            });
        }
        if timeout_seconds == 0 {
            return Err(SpecError::NonPositiveBound {
                field: "timeout_seconds",
            });
        }

        Ok(Self {
            max_iterations,
            max_data_size,
            timeout_seconds,
            allowed_resources: BTreeSet::new(),
        })
    }

    /// A scope with the given iteration bound and default data/time bounds.
    pub fn with_iterations(max_iterations: u64) -> Result<Self, SpecError> {
        Self::new(
            max_iterations,
            DEFAULT_MAX_DATA_SIZE,
            DEFAULT_TIMEOUT_SECONDS,
        )
    }

    pub fn with_allowed_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_resources = resources.into_iter().map(Into::into).collect();
        self
    }
}

/// Wire form of [`ExecutionScope`], validated on the way in.
#[derive(Deserialize)]
struct ExecutionScopeDef {
    max_iterations: u64,
    #[serde(default = "default_max_data_size")]
    max_data_size: u64,
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
    #[serde(default)]
    allowed_resources: Option<Vec<String>>,
}

fn default_max_data_size() -> u64 {
    DEFAULT_MAX_DATA_SIZE
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl TryFrom<ExecutionScopeDef> for ExecutionScope {
    type Error = SpecError;

    fn try_from(def: ExecutionScopeDef) -> Result<Self, Self::Error> {
        Ok(
            ExecutionScope::new(def.max_iterations, def.max_data_size, def.timeout_seconds)?
                .with_allowed_resources(def.allowed_resources.unwrap_or_default()),
        )
    }
}
