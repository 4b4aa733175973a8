use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use specgate_types::AuthorizationSpec;
use specgate_verify::{VerificationOrchestrator, VerificationReport};
use tracing::{info, warn};

use crate::context::{MonitoredContext, UsageSnapshot};
use crate::error::TaskError;
use crate::result::ExecutionResult;

/// Everything known about one enforced run.
#[derive(Debug)]
pub struct ExecutionOutcome<T> {
    pub report: VerificationReport,
    pub result: ExecutionResult<T>,
    /// Resource usage of the task; `None` when it never ran
    pub usage: Option<UsageSnapshot>,
}

/// Verify, then execute under mediation.
///
/// The enforcer holds no per-run state; each call builds a fresh context,
/// so one instance can serve any number of runs.
pub struct Enforcer {
    verifier: VerificationOrchestrator,
}

impl Default for Enforcer {
    fn default() -> Self {
        Self::new()
    }
}

impl Enforcer {
    pub fn new() -> Self {
        Self {
            verifier: VerificationOrchestrator::new(),
        }
    }

    pub fn with_orchestrator(verifier: VerificationOrchestrator) -> Self {
        Self { verifier }
    }

    pub fn orchestrator(&self) -> &VerificationOrchestrator {
        &self.verifier
    }

    /// Run `task` iff `spec` passes verification.
    pub fn execute<T, F>(&self, spec: Arc<AuthorizationSpec>, task: F) -> ExecutionResult<T>
    where
        F: FnOnce(&mut MonitoredContext) -> Result<T, TaskError>,
    {
        self.execute_audited(spec, task).result
    }

    /// Like [`execute`](Self::execute), also returning the verification
    /// report and the task's resource usage.
    ///
    /// Classification order:
    /// 1. verification failed: the task is never invoked
    /// 2. the context recorded a violation: reported even if the task
    ///    swallowed it and returned normally
    /// 3. the task's own error or panic
    /// 4. success
    pub fn execute_audited<T, F>(
        &self,
        spec: Arc<AuthorizationSpec>,
        task: F,
    ) -> ExecutionOutcome<T>
    where
        F: FnOnce(&mut MonitoredContext) -> Result<T, TaskError>,
    {
        let report = self.verifier.verify(&spec);

        if !report.passed {
            let reason = report
                .failure_reason
                .clone()
                .unwrap_or_else(|| "verification failed".to_string());
            warn!(spec_id = %spec.spec_id, reason = %reason, "Execution refused");
            return ExecutionOutcome {
                report,
                result: ExecutionResult::VerificationFailed { reason },
                usage: None,
            };
        }

        let spec_id = spec.spec_id.clone();
        let mut ctx = match MonitoredContext::new(spec) {
            Ok(ctx) => ctx,
            Err(violation) => {
                return ExecutionOutcome {
                    report,
                    result: ExecutionResult::RuntimeViolationFailed { violation },
                    usage: None,
                };
            }
        };

        info!(spec_id = %spec_id, "Executing task");
        let outcome = catch_unwind(AssertUnwindSafe(|| task(&mut ctx)));
        let usage = ctx.usage();

        let result = match (ctx.violation(), outcome) {
            (Some(violation), _) => ExecutionResult::RuntimeViolationFailed {
                violation: violation.clone(),
            },
            (None, Ok(Ok(value))) => ExecutionResult::Success { value },
            (None, Ok(Err(TaskError::Violation(violation)))) => {
                ExecutionResult::RuntimeViolationFailed { violation }
            }
            (None, Ok(Err(TaskError::Failed(err)))) => ExecutionResult::UnexpectedError {
                detail: format!("{err:#}"),
            },
            (None, Err(payload)) => ExecutionResult::UnexpectedError {
                detail: format!("task panicked: {}", panic_message(payload.as_ref())),
            },
        };

        match &result {
            ExecutionResult::Success { .. } => info!(
                spec_id = %spec_id,
                iterations = usage.iterations,
                bytes_read = usage.bytes_read,
                "Task completed"
            ),
            other => warn!(
                spec_id = %spec_id,
                category = %other.category(),
                detail = %other.detail().unwrap_or_default(),
                "Task stopped"
            ),
        }

        ExecutionOutcome {
            report,
            result,
            usage: Some(usage),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
