use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which boundary a runtime violation crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Input,
    Action,
    Scope,
}

/// An execution bound that was exceeded, with observed and allowed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScopeLimit {
    Iterations { observed: u64, limit: u64 },
    DataSize { observed: u64, limit: u64 },
}

impl std::fmt::Display for ScopeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeLimit::Iterations { observed, limit } => {
                write!(f, "iterations {observed} > {limit}")
            }
            ScopeLimit::DataSize { observed, limit } => {
                write!(f, "data read {observed} > {limit} bytes")
            }
        }
    }
}

/// A task attempted something outside its verified boundaries.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RuntimeViolation {
    #[error("unauthorized input access: {source_type}:{source_id}")]
    InputViolation {
        source_type: String,
        source_id: String,
    },

    #[error("unauthorized action: {action_type} on {target_type}")]
    ActionViolation {
        action_type: String,
        target_type: String,
    },

    #[error("execution scope exceeded: {0}")]
    ScopeViolation(ScopeLimit),

    #[error("execution scope missing: no bounds to enforce")]
    MissingScope,

    #[error("context terminated by earlier violation: {cause}")]
    Terminated { cause: Box<RuntimeViolation> },
}

impl RuntimeViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            RuntimeViolation::InputViolation { .. } => ViolationKind::Input,
            RuntimeViolation::ActionViolation { .. } => ViolationKind::Action,
            RuntimeViolation::ScopeViolation(_) | RuntimeViolation::MissingScope => {
                ViolationKind::Scope
            }
            RuntimeViolation::Terminated { cause } => cause.kind(),
        }
    }

    /// The violation that actually crossed a boundary.
    pub fn root_cause(&self) -> &RuntimeViolation {
        match self {
            RuntimeViolation::Terminated { cause } => cause.root_cause(),
            other => other,
        }
    }
}

/// Why a task stopped without producing a value.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A context operation signaled a violation
    #[error(transparent)]
    Violation(#[from] RuntimeViolation),

    /// Any other failure inside the task
    #[error("task failed: {0:#}")]
    Failed(#[from] anyhow::Error),
}

impl TaskError {
    pub fn failed(message: impl std::fmt::Display + std::fmt::Debug + Send + Sync + 'static) -> Self {
        TaskError::Failed(anyhow::Error::msg(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_pair() {
        let v = RuntimeViolation::InputViolation {
            source_type: "db".into(),
            source_id: "passwords".into(),
        };
        assert_eq!(v.to_string(), "unauthorized input access: db:passwords");
        assert_eq!(v.kind(), ViolationKind::Input);

        let v = RuntimeViolation::ActionViolation {
            action_type: "delete".into(),
            target_type: "database".into(),
        };
        assert_eq!(v.to_string(), "unauthorized action: delete on database");
        assert_eq!(v.kind(), ViolationKind::Action);
    }

    #[test]
    fn scope_messages_carry_observed_and_limit() {
        let v = RuntimeViolation::ScopeViolation(ScopeLimit::Iterations {
            observed: 3,
            limit: 2,
        });
        assert_eq!(v.to_string(), "execution scope exceeded: iterations 3 > 2");

        let v = RuntimeViolation::ScopeViolation(ScopeLimit::DataSize {
            observed: 1350,
            limit: 1000,
        });
        assert!(v.to_string().contains("1350 > 1000 bytes"));
        assert_eq!(v.kind(), ViolationKind::Scope);
    }

    #[test]
    fn terminated_keeps_root_cause() {
        let root = RuntimeViolation::ActionViolation {
            action_type: "write".into(),
            target_type: "file".into(),
        };
        let wrapped = RuntimeViolation::Terminated {
            cause: Box::new(root.clone()),
        };
        assert_eq!(wrapped.kind(), ViolationKind::Action);
        assert_eq!(wrapped.root_cause(), &root);
        assert!(wrapped.to_string().contains("write on file"));
    }

    #[test]
    fn task_error_conversions() {
        let err: TaskError = RuntimeViolation::MissingScope.into();
        assert!(matches!(err, TaskError::Violation(RuntimeViolation::MissingScope)));

        let err = TaskError::failed("model returned garbage");
        assert_eq!(err.to_string(), "task failed: model returned garbage");
    }
}
