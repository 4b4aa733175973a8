use specgate_types::AuthorizationSpec;

use crate::check::{CheckResult, Checker};

/// Every execution bound must be positive.
///
/// Construction already rejects zero bounds; this is the audited, reportable
/// form of the same rule, independent of how the spec was produced.
pub struct ScopeBoundednessChecker;

impl Checker for ScopeBoundednessChecker {
    fn name(&self) -> &str {
        "ScopeBoundednessChecker"
    }

    fn check(&self, spec: &AuthorizationSpec) -> CheckResult {
        let Some(scope) = &spec.execution_scope else {
            return CheckResult::from_violations(
                self.name(),
                vec!["execution_scope is not provided".to_string()],
            );
        };

        let mut violations = Vec::new();

        if scope.max_iterations == 0 {
            violations.push(format!(
                "max_iterations must be > 0 (current: {})",
                scope.max_iterations
            ));
        }

        if scope.max_data_size == 0 {
            violations.push(format!(
                "max_data_size must be > 0 bytes (current: {})",
                scope.max_data_size
            ));
        }

        if scope.timeout_seconds == 0 {
            violations.push(format!(
                "timeout_seconds must be > 0 (current: {})",
                scope.timeout_seconds
            ));
        }

        CheckResult::from_violations(self.name(), violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use specgate_types::{AllowedInput, ExecutionScope, PermittedAction};

    fn spec_with(scope: Option<ExecutionScope>) -> AuthorizationSpec {
        let builder = AuthorizationSpec::builder("test-scope", "1.0")
            .allow_input(AllowedInput::new("db", "users"))
            .no_forbidden_inputs()
            .permit(PermittedAction::new("read", "summary"));
        match scope {
            Some(scope) => builder.scope(scope).build(),
            None => builder.build(),
        }
    }

    fn raw_scope(max_iterations: u64, max_data_size: u64, timeout_seconds: u64) -> ExecutionScope {
        ExecutionScope {
            max_iterations,
            max_data_size,
            timeout_seconds,
            allowed_resources: BTreeSet::new(),
        }
    }

    #[test]
    fn positive_bounds_pass() {
        let spec = spec_with(Some(ExecutionScope::new(100, 1000, 60).unwrap()));
        assert!(ScopeBoundednessChecker.check(&spec).passed);
    }

    #[test]
    fn missing_scope_fails() {
        let result = ScopeBoundednessChecker.check(&spec_with(None));
        assert!(!result.passed);
        assert_eq!(result.violations, vec!["execution_scope is not provided"]);
    }

    #[test]
    fn zero_iterations_fails() {
        let result = ScopeBoundednessChecker.check(&spec_with(Some(raw_scope(0, 1000, 60))));
        assert!(!result.passed);
        assert!(result.violations[0].contains("max_iterations"));
    }

    #[test]
    fn zero_timeout_fails() {
        let result = ScopeBoundednessChecker.check(&spec_with(Some(raw_scope(100, 1000, 0))));
        assert!(!result.passed);
        assert!(result.violations[0].contains("timeout"));
    }

    #[test]
    fn all_zero_bounds_reported() {
        let result = ScopeBoundednessChecker.check(&spec_with(Some(raw_scope(0, 0, 0))));
        assert_eq!(result.violations.len(), 3);
    }
}
