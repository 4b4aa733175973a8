use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::model::{AllowedInput, ExecutionScope, PermittedAction};
use crate::pattern::ForbiddenPattern;

/// The declarative record of everything a task may read, do, and be bound by.
///
/// Built once per task/session and never mutated. Verification and every
/// monitored context read the same shared value, so re-verifying a spec
/// always yields the same checker outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationSpec {
    pub spec_id: String,
    pub version: String,
    /// Every source the task may read
    #[serde(default)]
    pub allowed_inputs: Vec<AllowedInput>,
    /// Declared exclusions; `None` means the declaration was omitted
    #[serde(default)]
    pub forbidden_inputs: Option<Vec<ForbiddenPattern>>,
    /// Every effect the task may perform
    #[serde(default)]
    pub permitted_actions: Vec<PermittedAction>,
    /// Bounds for the run; `None` means the declaration was omitted
    #[serde(default)]
    pub execution_scope: Option<ExecutionScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl AuthorizationSpec {
    /// Create a builder for ergonomic construction.
    pub fn builder(
        spec_id: impl Into<String>,
        version: impl Into<String>,
    ) -> AuthorizationSpecBuilder {
        AuthorizationSpecBuilder {
            spec_id: spec_id.into(),
            version: version.into(),
            allowed_inputs: Vec::new(),
            forbidden_inputs: None,
            permitted_actions: Vec::new(),
            execution_scope: None,
            metadata: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SpecError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Forbidden patterns, treating an omitted declaration as empty.
    pub fn forbidden_patterns(&self) -> &[ForbiddenPattern] {
        self.forbidden_inputs.as_deref().unwrap_or(&[])
    }

    /// Find the allowed input with this exact identity.
    pub fn allowed_input(&self, source_type: &str, source_id: &str) -> Option<&AllowedInput> {
        self.allowed_inputs
            .iter()
            .find(|i| i.matches(source_type, source_id))
    }

    /// Find the permitted action with this exact identity.
    pub fn permitted_action(&self, action_type: &str, target_type: &str) -> Option<&PermittedAction> {
        self.permitted_actions
            .iter()
            .find(|a| a.matches(action_type, target_type))
    }
}

/// Builder for AuthorizationSpec.
pub struct AuthorizationSpecBuilder {
    spec_id: String,
    version: String,
    allowed_inputs: Vec<AllowedInput>,
    forbidden_inputs: Option<Vec<ForbiddenPattern>>,
    permitted_actions: Vec<PermittedAction>,
    execution_scope: Option<ExecutionScope>,
    metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl AuthorizationSpecBuilder {
    pub fn allow_input(mut self, input: AllowedInput) -> Self {
        self.allowed_inputs.push(input);
        self
    }

    pub fn allowed_inputs(mut self, inputs: Vec<AllowedInput>) -> Self {
        self.allowed_inputs = inputs;
        self
    }

    /// Add a forbidden pattern, declaring the forbidden list if needed.
    pub fn forbid(mut self, pattern: ForbiddenPattern) -> Self {
        self.forbidden_inputs
            .get_or_insert_with(Vec::new)
            .push(pattern);
        self
    }

    /// Explicitly declare an empty forbidden list.
    pub fn no_forbidden_inputs(mut self) -> Self {
        self.forbidden_inputs = Some(Vec::new());
        self
    }

    pub fn forbidden_inputs(mut self, patterns: Option<Vec<ForbiddenPattern>>) -> Self {
        self.forbidden_inputs = patterns;
        self
    }

    pub fn permit(mut self, action: PermittedAction) -> Self {
        self.permitted_actions.push(action);
        self
    }

    pub fn permitted_actions(mut self, actions: Vec<PermittedAction>) -> Self {
        self.permitted_actions = actions;
        self
    }

    pub fn scope(mut self, scope: ExecutionScope) -> Self {
        self.execution_scope = Some(scope);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> AuthorizationSpec {
        AuthorizationSpec {
            spec_id: self.spec_id,
            version: self.version,
            allowed_inputs: self.allowed_inputs,
            forbidden_inputs: self.forbidden_inputs,
            permitted_actions: self.permitted_actions,
            execution_scope: self.execution_scope,
            metadata: self.metadata,
        }
    }

    /// Build and wrap for read-only sharing.
    pub fn build_shared(self) -> Arc<AuthorizationSpec> {
        Arc::new(self.build())
    }
}
