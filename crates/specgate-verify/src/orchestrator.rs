use std::sync::Arc;

use chrono::Utc;
use specgate_types::AuthorizationSpec;

use crate::check::{CheckResult, Checker};
use crate::checkers::default_checkers;
use crate::observer::{TracingObserver, VerificationEvent, VerificationObserver};
use crate::report::{compute_audit_hash, VerificationReport};
use crate::risk::{RiskConfig, RiskScorer};

/// Runs every checker and assembles the auditable report.
///
/// Execution may proceed iff every check passes. Verification always
/// completes and returns a report, even when every checker fails.
pub struct VerificationOrchestrator {
    checkers: Vec<Box<dyn Checker>>,
    risk_scorer: RiskScorer,
    observer: Arc<dyn VerificationObserver>,
}

impl Default for VerificationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationOrchestrator {
    /// Standard battery, default risk thresholds, `tracing` output.
    pub fn new() -> Self {
        Self {
            checkers: default_checkers(),
            risk_scorer: RiskScorer::default(),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_risk_config(mut self, config: RiskConfig) -> Self {
        self.risk_scorer = RiskScorer::with_config(config);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn VerificationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the checker battery. Results are reported in the given order.
    pub fn with_checkers(mut self, checkers: Vec<Box<dyn Checker>>) -> Self {
        self.checkers = checkers;
        self
    }

    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    pub fn verify(&self, spec: &AuthorizationSpec) -> VerificationReport {
        self.observer.on_event(&VerificationEvent::Started {
            spec_id: spec.spec_id.clone(),
            version: spec.version.clone(),
        });

        let mut results: Vec<CheckResult> = Vec::with_capacity(self.checkers.len());
        let mut violations: Vec<String> = Vec::new();

        for checker in &self.checkers {
            let result = checker.check(spec);
            self.observer.on_event(&VerificationEvent::CheckCompleted {
                spec_id: spec.spec_id.clone(),
                checker: result.checker_name.clone(),
                passed: result.passed,
                violations: result.violations.clone(),
            });
            if !result.passed {
                violations.extend(result.violations.iter().cloned());
            }
            results.push(result);
        }

        let passed = results.iter().all(|r| r.passed);
        let failure_reason = (!violations.is_empty()).then(|| violations.join("; "));

        let timestamp = Utc::now();
        let audit_hash = compute_audit_hash(&spec.spec_id, &timestamp, results.len(), passed);

        let risk = self.risk_scorer.score_spec(spec);
        self.observer.on_event(&VerificationEvent::RiskScored {
            spec_id: spec.spec_id.clone(),
            severity: risk.severity,
            overall_risk: risk.overall_risk,
            risk_factors: risk.risk_factors.clone(),
        });

        self.observer.on_event(&VerificationEvent::Completed {
            spec_id: spec.spec_id.clone(),
            passed,
            violation_count: violations.len(),
            audit_hash: audit_hash.clone(),
        });

        VerificationReport {
            passed,
            timestamp,
            audit_hash,
            checker_results: results,
            failure_reason,
            risk_assessment: Some(risk),
        }
    }
}
