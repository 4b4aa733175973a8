use specgate_types::{AuthorizationSpec, PatternMatch};

use crate::check::{CheckResult, Checker};

/// No forbidden pattern may overlap an allowed input.
///
/// Every `(forbidden, allowed)` pair is evaluated with the shared pattern
/// matcher; each overlapping pair yields one violation naming both sides.
/// An omitted forbidden list is left to the completeness check.
pub struct ForbiddenDataChecker;

impl Checker for ForbiddenDataChecker {
    fn name(&self) -> &str {
        "ForbiddenDataChecker"
    }

    fn check(&self, spec: &AuthorizationSpec) -> CheckResult {
        let mut violations = Vec::new();

        for forbidden in spec.forbidden_patterns() {
            for allowed in &spec.allowed_inputs {
                match forbidden.matches(&allowed.source_id) {
                    Some(PatternMatch::Exact) => violations.push(format!(
                        "Forbidden pattern '{}' overlaps with allowed input '{}': {}",
                        forbidden.pattern_value, allowed.source_id, forbidden.reason
                    )),
                    Some(PatternMatch::Prefix) => violations.push(format!(
                        "Forbidden {} pattern '{}' may match allowed input '{}': {}",
                        forbidden.pattern_type,
                        forbidden.pattern_value,
                        allowed.source_id,
                        forbidden.reason
                    )),
                    None => {}
                }
            }
        }

        CheckResult::from_violations(self.name(), violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgate_types::{AllowedInput, ExecutionScope, ForbiddenPattern, PermittedAction};

    fn spec_with(allowed: &[&str], forbidden: Vec<ForbiddenPattern>) -> AuthorizationSpec {
        AuthorizationSpec::builder("test-forbidden", "1.0")
            .allowed_inputs(
                allowed
                    .iter()
                    .map(|id| AllowedInput::new("db", *id))
                    .collect(),
            )
            .forbidden_inputs(Some(forbidden))
            .permit(PermittedAction::new("read", "summary"))
            .scope(ExecutionScope::with_iterations(100).unwrap())
            .build()
    }

    #[test]
    fn disjoint_patterns_pass() {
        let spec = spec_with(
            &["users_table"],
            vec![ForbiddenPattern::exact("passwords_table", "sensitive")],
        );
        assert!(ForbiddenDataChecker.check(&spec).passed);
    }

    #[test]
    fn no_patterns_trivially_pass() {
        let spec = spec_with(&["users_table", "orders"], vec![]);
        assert!(ForbiddenDataChecker.check(&spec).passed);

        let mut omitted = spec;
        omitted.forbidden_inputs = None;
        assert!(ForbiddenDataChecker.check(&omitted).passed);
    }

    #[test]
    fn exact_overlap_names_both_values() {
        let spec = spec_with(
            &["users_table"],
            vec![ForbiddenPattern::exact("users_table", "oops")],
        );
        let result = ForbiddenDataChecker.check(&spec);
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 1);
        let msg = &result.violations[0];
        assert!(msg.contains("overlaps"));
        assert!(msg.contains("'users_table'"));
        assert!(msg.ends_with("oops"));
    }

    #[test]
    fn wildcard_prefix_overlap_detected() {
        let spec = spec_with(
            &["user_profile", "orders"],
            vec![ForbiddenPattern::wildcard("user_*", "user tables forbidden")],
        );
        let result = ForbiddenDataChecker.check(&spec);
        assert!(!result.passed);
        assert_eq!(result.violations.len(), 1);
        let msg = result.violations[0].to_lowercase();
        assert!(msg.contains("pattern") && msg.contains("match"));
        assert!(msg.contains("user_*") && msg.contains("user_profile"));
    }

    #[test]
    fn starless_wildcard_does_not_prefix_match() {
        let spec = spec_with(
            &["users"],
            vec![
                ForbiddenPattern::wildcard("user", "no star"),
                ForbiddenPattern::wildcard("", "empty value"),
            ],
        );
        let result = ForbiddenDataChecker.check(&spec);
        assert!(result.passed, "{:?}", result.violations);
    }

    #[test]
    fn every_overlapping_pair_reported() {
        let spec = spec_with(
            &["secret_a", "secret_b", "public"],
            vec![
                ForbiddenPattern::wildcard("secret_*", "secrets"),
                ForbiddenPattern::exact("public", "not actually public"),
            ],
        );
        let result = ForbiddenDataChecker.check(&spec);
        assert_eq!(result.violations.len(), 3);
    }
}
