use specgate_types::AuthorizationSpec;

use crate::check::{CheckResult, Checker};

/// Every permitted action must be fully and explicitly declared.
///
/// No implicit actions: each needs a non-empty `action_type` and
/// `target_type` and a present (possibly empty) `parameters_schema`.
pub struct ActionBoundaryChecker;

impl Checker for ActionBoundaryChecker {
    fn name(&self) -> &str {
        "ActionBoundaryChecker"
    }

    fn check(&self, spec: &AuthorizationSpec) -> CheckResult {
        if spec.permitted_actions.is_empty() {
            return CheckResult::from_violations(
                self.name(),
                vec![
                    "No permitted actions defined: every allowed action must be declared explicitly"
                        .to_string(),
                ],
            );
        }

        let mut violations = Vec::new();

        for (i, action) in spec.permitted_actions.iter().enumerate() {
            if action.action_type.trim().is_empty() {
                violations.push(format!("Action {i}: action_type is missing or empty"));
            }

            if action.target_type.trim().is_empty() {
                violations.push(format!("Action {i}: target_type is missing or empty"));
            }

            if action.parameters_schema.is_none() {
                let label = if action.action_type.is_empty() {
                    "<unknown>"
                } else {
                    action.action_type.as_str()
                };
                violations.push(format!(
                    "Action {i} ({label}): parameters_schema is absent (must be present, even if empty)"
                ));
            }
        }

        CheckResult::from_violations(self.name(), violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgate_types::{AllowedInput, ExecutionScope, PermittedAction};

    fn spec_with(actions: Vec<PermittedAction>) -> AuthorizationSpec {
        AuthorizationSpec::builder("test-actions", "1.0")
            .allow_input(AllowedInput::new("db", "users"))
            .no_forbidden_inputs()
            .permitted_actions(actions)
            .scope(ExecutionScope::with_iterations(10).unwrap())
            .build()
    }

    #[test]
    fn declared_actions_pass() {
        let spec = spec_with(vec![
            PermittedAction::new("read", "summary"),
            PermittedAction::new("write", "log"),
        ]);
        assert!(ActionBoundaryChecker.check(&spec).passed);
    }

    #[test]
    fn no_actions_fails() {
        let result = ActionBoundaryChecker.check(&spec_with(vec![]));
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn empty_identity_fields_fail() {
        let result = ActionBoundaryChecker.check(&spec_with(vec![PermittedAction::new("", " ")]));
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 2);
        assert!(result.violations[0].contains("action_type"));
        assert!(result.violations[1].contains("target_type"));
    }

    #[test]
    fn absent_parameters_schema_fails() {
        let mut action = PermittedAction::new("write", "file");
        action.parameters_schema = None;
        let result = ActionBoundaryChecker.check(&spec_with(vec![
            PermittedAction::new("read", "summary"),
            action,
        ]));
        assert!(!result.passed);
        assert_eq!(
            result.violations,
            vec!["Action 1 (write): parameters_schema is absent (must be present, even if empty)"]
        );
    }
}
