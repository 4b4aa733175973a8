//! # specgate-runtime
//!
//! Runtime half of the gate. A task never touches the outside world
//! directly: every read, action and loop iteration goes through a
//! [`MonitoredContext`] bound to the spec that static verification approved.
//!
//! ## Guarantees
//!
//! - **Verify first**: [`Enforcer::execute`] runs the task only after the
//!   spec passes every checker; otherwise the task is never invoked.
//! - **Reject before effect**: each context operation checks its boundary
//!   before producing anything. No operation partially succeeds.
//! - **Fail closed**: the first violation terminates the context. Later calls
//!   fail, and a task that swallows a violation is still reported as violating.
//!
//! Wall-clock timeouts are declared in the spec but enforced by whatever
//! supervises the process, not here.

pub mod context;
pub mod enforcer;
pub mod error;
pub mod result;

pub use context::{ContextState, MonitoredContext, UsageSnapshot};
pub use enforcer::{Enforcer, ExecutionOutcome};
pub use error::{RuntimeViolation, ScopeLimit, TaskError, ViolationKind};
pub use result::{ExecutionCategory, ExecutionRecord, ExecutionResult};
