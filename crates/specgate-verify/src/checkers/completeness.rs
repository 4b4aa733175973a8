use specgate_types::AuthorizationSpec;

use crate::check::{CheckResult, Checker};

/// Every declaration relevant to an authorization decision must be explicit.
///
/// An empty forbidden list is an explicit declaration and passes; an omitted
/// one does not. All violated rules are reported, not just the first.
pub struct CompletenessChecker;

impl Checker for CompletenessChecker {
    fn name(&self) -> &str {
        "CompletenessChecker"
    }

    fn check(&self, spec: &AuthorizationSpec) -> CheckResult {
        let mut violations = Vec::new();

        if spec.allowed_inputs.is_empty() {
            violations.push(
                "No allowed inputs defined: allowed_inputs must explicitly declare every data source"
                    .to_string(),
            );
        }

        if spec.permitted_actions.is_empty() {
            violations.push(
                "No permitted actions defined: permitted_actions must explicitly declare every action"
                    .to_string(),
            );
        }

        if spec.execution_scope.is_none() {
            violations.push(
                "Execution scope missing: execution_scope must bound iterations, data size and timeout"
                    .to_string(),
            );
        }

        if spec.forbidden_inputs.is_none() {
            violations.push(
                "Forbidden inputs not declared: forbidden_inputs must be an explicit list (empty if none apply)"
                    .to_string(),
            );
        }

        CheckResult::from_violations(self.name(), violations)
    }
}
