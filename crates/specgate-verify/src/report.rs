use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::check::CheckResult;
use crate::risk::RiskAssessment;

/// Auditable outcome of one verification run.
///
/// Serializes to the compliance export: `passed`, `timestamp` (RFC 3339),
/// `audit_hash`, `checker_results`, `failure_reason`, `risk_assessment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True iff every checker passed
    pub passed: bool,
    pub timestamp: DateTime<Utc>,
    /// Per-run fingerprint, see [`compute_audit_hash`]
    pub audit_hash: String,
    pub checker_results: Vec<CheckResult>,
    /// All violations joined with `"; "`, or `None` when passed
    pub failure_reason: Option<String>,
    /// Advisory; computed even when verification fails
    pub risk_assessment: Option<RiskAssessment>,
}

impl VerificationReport {
    /// Export as pretty-printed JSON for compliance review.
    pub fn to_audit_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported report.
    pub fn from_audit_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Names of the checkers that failed, in audit order.
    pub fn failed_checks(&self) -> Vec<&str> {
        self.checker_results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.checker_name.as_str())
            .collect()
    }

    /// Every violation across all checkers, in audit order.
    pub fn violations(&self) -> impl Iterator<Item = &str> {
        self.checker_results
            .iter()
            .flat_map(|r| r.violations.iter().map(String::as_str))
    }

    /// Recompute the audit hash for `spec_id` and compare.
    ///
    /// Detects edits to the timestamp, checker count or verdict of an
    /// exported report.
    pub fn matches_audit_hash(&self, spec_id: &str) -> bool {
        compute_audit_hash(
            spec_id,
            &self.timestamp,
            self.checker_results.len(),
            self.passed,
        ) == self.audit_hash
    }
}

impl std::fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        write!(
            f,
            "VerificationReport(status={}, checks={}, timestamp={}",
            status,
            self.checker_results.len(),
            self.timestamp.to_rfc3339()
        )?;
        if let Some(risk) = &self.risk_assessment {
            write!(f, ", risk={}", risk.severity)?;
        }
        f.write_str(")")
    }
}

/// SHA-256 hex digest over `spec_id|timestamp|checker_count|passed`.
///
/// A per-run fingerprint, not a content hash of the spec.
pub fn compute_audit_hash(
    spec_id: &str,
    timestamp: &DateTime<Utc>,
    checker_count: usize,
    passed: bool,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(
        format!(
            "{}|{}|{}|{}",
            spec_id,
            timestamp.to_rfc3339(),
            checker_count,
            passed
        )
        .as_bytes(),
    );
    hex::encode(hasher.finalize())
}
