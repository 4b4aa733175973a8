use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RuntimeViolation;

/// Outcome category of one enforced execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionCategory {
    Success,
    VerificationFailed,
    RuntimeViolation,
    UnexpectedError,
}

impl ExecutionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionCategory::Success => "success",
            ExecutionCategory::VerificationFailed => "verification_failed",
            ExecutionCategory::RuntimeViolation => "runtime_violation",
            ExecutionCategory::UnexpectedError => "unexpected_error",
        }
    }
}

impl std::fmt::Display for ExecutionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened when a task ran under enforcement.
///
/// Exactly one variant per run. A value is only present on success.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionResult<T> {
    Success { value: T },
    /// Static verification rejected the spec; the task never ran
    VerificationFailed { reason: String },
    /// The task crossed a boundary and its context was terminated
    RuntimeViolationFailed { violation: RuntimeViolation },
    /// The task failed or panicked for reasons unrelated to its boundaries
    UnexpectedError { detail: String },
}

impl<T> ExecutionResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    pub fn category(&self) -> ExecutionCategory {
        match self {
            ExecutionResult::Success { .. } => ExecutionCategory::Success,
            ExecutionResult::VerificationFailed { .. } => ExecutionCategory::VerificationFailed,
            ExecutionResult::RuntimeViolationFailed { .. } => ExecutionCategory::RuntimeViolation,
            ExecutionResult::UnexpectedError { .. } => ExecutionCategory::UnexpectedError,
        }
    }

    /// Human-readable failure detail, `None` on success.
    pub fn detail(&self) -> Option<String> {
        match self {
            ExecutionResult::Success { .. } => None,
            ExecutionResult::VerificationFailed { reason } => Some(reason.clone()),
            ExecutionResult::RuntimeViolationFailed { violation } => Some(violation.to_string()),
            ExecutionResult::UnexpectedError { detail } => Some(detail.clone()),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ExecutionResult::Success { value } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            ExecutionResult::Success { value } => Some(value),
            _ => None,
        }
    }

    pub fn violation(&self) -> Option<&RuntimeViolation> {
        match self {
            ExecutionResult::RuntimeViolationFailed { violation } => Some(violation),
            _ => None,
        }
    }
}

impl<T: Serialize> ExecutionResult<T> {
    /// Flatten into the serializable record used for logs and CLI output.
    pub fn to_record(&self) -> Result<ExecutionRecord, serde_json::Error> {
        let result = match self.value() {
            Some(value) => Some(serde_json::to_value(value)?),
            None => None,
        };
        Ok(ExecutionRecord {
            success: self.is_success(),
            category: self.category(),
            detail: self.detail(),
            result,
        })
    }
}

/// Serializable form of an [`ExecutionResult`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub success: bool,
    pub category: ExecutionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScopeLimit;

    #[test]
    fn success_carries_value_only() {
        let r: ExecutionResult<u32> = ExecutionResult::Success { value: 7 };
        assert!(r.is_success());
        assert_eq!(r.category(), ExecutionCategory::Success);
        assert_eq!(r.value(), Some(&7));
        assert!(r.detail().is_none());
        assert!(r.violation().is_none());
    }

    #[test]
    fn violation_detail_is_message() {
        let r: ExecutionResult<u32> = ExecutionResult::RuntimeViolationFailed {
            violation: RuntimeViolation::ScopeViolation(ScopeLimit::Iterations {
                observed: 4,
                limit: 3,
            }),
        };
        assert!(!r.is_success());
        assert_eq!(r.category().as_str(), "runtime_violation");
        assert!(r.detail().unwrap().contains("4 > 3"));
        assert!(r.into_value().is_none());
    }

    #[test]
    fn record_serializes_category_snake_case() {
        let r: ExecutionResult<String> = ExecutionResult::VerificationFailed {
            reason: "execution_scope is not provided".into(),
        };
        let json = serde_json::to_value(r.to_record().unwrap()).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["category"], "verification_failed");
        assert!(json.get("result").is_none());

        let ok: ExecutionResult<String> = ExecutionResult::Success {
            value: "Processed".into(),
        };
        let json = serde_json::to_value(ok.to_record().unwrap()).unwrap();
        assert_eq!(json["result"], "Processed");
        assert!(json.get("detail").is_none());
    }
}
