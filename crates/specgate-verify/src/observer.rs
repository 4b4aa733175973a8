//! Structured verification events.
//!
//! The orchestrator never logs from inside the pass/fail computation; it
//! reports what happened to a [`VerificationObserver`]. The default
//! [`TracingObserver`] forwards events to `tracing`.

use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::risk::Severity;

/// One step of a verification run.
#[derive(Clone, Debug, PartialEq)]
pub enum VerificationEvent {
    Started {
        spec_id: String,
        version: String,
    },
    CheckCompleted {
        spec_id: String,
        checker: String,
        passed: bool,
        violations: Vec<String>,
    },
    RiskScored {
        spec_id: String,
        severity: Severity,
        overall_risk: f64,
        risk_factors: Vec<String>,
    },
    Completed {
        spec_id: String,
        passed: bool,
        violation_count: usize,
        audit_hash: String,
    },
}

/// Receives verification events as they happen.
pub trait VerificationObserver: Send + Sync {
    fn on_event(&self, event: &VerificationEvent);
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl VerificationObserver for TracingObserver {
    fn on_event(&self, event: &VerificationEvent) {
        match event {
            VerificationEvent::Started { spec_id, version } => {
                info!(spec_id = %spec_id, version = %version, "Starting static verification");
            }
            VerificationEvent::CheckCompleted {
                spec_id,
                checker,
                passed,
                violations,
            } => {
                if *passed {
                    info!(spec_id = %spec_id, checker = %checker, "Check passed");
                } else {
                    info!(
                        spec_id = %spec_id,
                        checker = %checker,
                        violations = violations.len(),
                        "Check failed"
                    );
                    for v in violations {
                        debug!(checker = %checker, violation = %v, "Violation");
                    }
                }
            }
            VerificationEvent::RiskScored {
                spec_id,
                severity,
                overall_risk,
                risk_factors,
            } => {
                info!(
                    spec_id = %spec_id,
                    severity = %severity,
                    score = %format!("{overall_risk:.2}"),
                    "Risk assessed"
                );
                if *severity > Severity::Low {
                    for factor in risk_factors {
                        warn!(spec_id = %spec_id, factor = %factor, "Risk factor");
                    }
                }
            }
            VerificationEvent::Completed {
                spec_id,
                passed,
                violation_count,
                audit_hash,
            } => {
                if *passed {
                    info!(spec_id = %spec_id, audit_hash = %audit_hash, "Verification passed");
                } else {
                    warn!(
                        spec_id = %spec_id,
                        violations = violation_count,
                        audit_hash = %audit_hash,
                        "Verification failed"
                    );
                }
            }
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl VerificationObserver for NoopObserver {
    fn on_event(&self, _event: &VerificationEvent) {}
}

/// Collects events in memory, for tests and audit capture.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<VerificationEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<VerificationEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl VerificationObserver for RecordingObserver {
    fn on_event(&self, event: &VerificationEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
