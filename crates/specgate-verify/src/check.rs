use serde::{Deserialize, Serialize};
use specgate_types::AuthorizationSpec;

/// Outcome of one checker over one spec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub checker_name: String,
    pub passed: bool,
    pub violations: Vec<String>,
}

impl CheckResult {
    /// Passed iff no violations were collected.
    pub fn from_violations(checker_name: impl Into<String>, violations: Vec<String>) -> Self {
        Self {
            checker_name: checker_name.into(),
            passed: violations.is_empty(),
            violations,
        }
    }
}

/// A pure validation rule over a specification.
///
/// Checkers hold no state between calls and perform no I/O; each one
/// evaluates the whole spec independently of the others.
pub trait Checker: Send + Sync {
    /// Stable name recorded in reports.
    fn name(&self) -> &str;

    fn check(&self, spec: &AuthorizationSpec) -> CheckResult;
}
