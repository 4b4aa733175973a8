use std::sync::Arc;

use serde::{Deserialize, Serialize};
use specgate_types::{AuthorizationSpec, ExecutionScope};
use tracing::{debug, warn};

use crate::error::{RuntimeViolation, ScopeLimit};

/// Lifecycle of a monitored context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    Active,
    /// Stopped by the first violation; never reactivated
    Terminated(RuntimeViolation),
}

/// Resource accounting at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub iterations: u64,
    pub bytes_read: u64,
    pub reads: u64,
    pub actions: u64,
}

/// The only channel between a task and the outside world.
///
/// Owned by exactly one task invocation and discarded afterwards. Every
/// operation checks its boundary before any simulated effect; identity
/// comparisons are exact string matches with no normalization.
#[derive(Debug)]
pub struct MonitoredContext {
    spec: Arc<AuthorizationSpec>,
    scope: ExecutionScope,
    usage: UsageSnapshot,
    state: ContextState,
}

impl MonitoredContext {
    /// Bind a context to a spec. A spec without an execution scope has
    /// nothing to enforce and is refused.
    pub fn new(spec: Arc<AuthorizationSpec>) -> Result<Self, RuntimeViolation> {
        let scope = spec
            .execution_scope
            .clone()
            .ok_or(RuntimeViolation::MissingScope)?;

        Ok(Self {
            spec,
            scope,
            usage: UsageSnapshot::default(),
            state: ContextState::Active,
        })
    }

    pub fn spec(&self) -> &AuthorizationSpec {
        &self.spec
    }

    pub fn state(&self) -> &ContextState {
        &self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, ContextState::Terminated(_))
    }

    /// The violation that terminated this context, if any.
    pub fn violation(&self) -> Option<&RuntimeViolation> {
        match &self.state {
            ContextState::Terminated(v) => Some(v),
            ContextState::Active => None,
        }
    }

    pub fn iterations(&self) -> u64 {
        self.usage.iterations
    }

    pub fn bytes_read(&self) -> u64 {
        self.usage.bytes_read
    }

    pub fn usage(&self) -> UsageSnapshot {
        self.usage
    }

    /// Read from a declared source.
    ///
    /// Returns a synthetic payload tagged with `source_id`. Its length counts
    /// against `max_data_size` cumulatively, so many small authorized reads
    /// cannot add up past the bound.
    pub fn read_input(
        &mut self,
        source_type: &str,
        source_id: &str,
    ) -> Result<String, RuntimeViolation> {
        self.ensure_active()?;

        if self.spec.allowed_input(source_type, source_id).is_none() {
            return Err(self.terminate(RuntimeViolation::InputViolation {
                source_type: source_type.to_string(),
                source_id: source_id.to_string(),
            }));
        }

        let payload = format!("[DATA from {source_id}]");
        let total = self.usage.bytes_read.saturating_add(payload.len() as u64);
        if total > self.scope.max_data_size {
            self.usage.bytes_read = total;
            return Err(self.terminate(RuntimeViolation::ScopeViolation(ScopeLimit::DataSize {
                observed: total,
                limit: self.scope.max_data_size,
            })));
        }

        self.usage.bytes_read = total;
        self.usage.reads += 1;
        debug!(
            spec_id = %self.spec.spec_id,
            source_type,
            source_id,
            bytes_read = total,
            "Input read"
        );
        Ok(payload)
    }

    /// Authorize a declared action. The action itself is a no-op here.
    pub fn perform_action(
        &mut self,
        action_type: &str,
        target_type: &str,
    ) -> Result<(), RuntimeViolation> {
        self.ensure_active()?;

        if self.spec.permitted_action(action_type, target_type).is_none() {
            return Err(self.terminate(RuntimeViolation::ActionViolation {
                action_type: action_type.to_string(),
                target_type: target_type.to_string(),
            }));
        }

        self.usage.actions += 1;
        debug!(
            spec_id = %self.spec.spec_id,
            action_type,
            target_type,
            "Action performed"
        );
        Ok(())
    }

    /// Account for one loop iteration.
    ///
    /// The only runtime bound on iterations: tasks are expected to call it
    /// once per logical step.
    pub fn tick(&mut self) -> Result<(), RuntimeViolation> {
        self.ensure_active()?;

        self.usage.iterations += 1;
        if self.usage.iterations > self.scope.max_iterations {
            return Err(self.terminate(RuntimeViolation::ScopeViolation(
                ScopeLimit::Iterations {
                    observed: self.usage.iterations,
                    limit: self.scope.max_iterations,
                },
            )));
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), RuntimeViolation> {
        match &self.state {
            ContextState::Active => Ok(()),
            ContextState::Terminated(cause) => Err(RuntimeViolation::Terminated {
                cause: Box::new(cause.clone()),
            }),
        }
    }

    fn terminate(&mut self, violation: RuntimeViolation) -> RuntimeViolation {
        warn!(
            spec_id = %self.spec.spec_id,
            kind = ?violation.kind(),
            violation = %violation,
            "Runtime violation; context terminated"
        );
        self.state = ContextState::Terminated(violation.clone());
        violation
    }
}
