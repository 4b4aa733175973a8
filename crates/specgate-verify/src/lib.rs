//! # specgate-verify
//!
//! Static verification of an [`AuthorizationSpec`](specgate_types::AuthorizationSpec)
//! before any task runs.
//!
//! ## Pipeline
//!
//! 1. **Completeness**: every mandatory declaration is present
//! 2. **Forbidden data**: no forbidden pattern overlaps an allowed input
//! 3. **Action boundary**: every permitted action is fully declared
//! 4. **Scope boundedness**: every execution bound is positive
//!
//! All four checkers evaluate the full spec every time; the order only fixes
//! the order of results in the report. The [`VerificationOrchestrator`]
//! combines them into a [`VerificationReport`] carrying a per-run audit hash
//! and an advisory [`RiskAssessment`]. Violations are collected, never raised.

pub mod check;
pub mod checkers;
pub mod explain;
pub mod observer;
pub mod orchestrator;
pub mod report;
pub mod risk;

pub use check::{CheckResult, Checker};
pub use checkers::{
    default_checkers, ActionBoundaryChecker, CompletenessChecker, ForbiddenDataChecker,
    ScopeBoundednessChecker,
};
pub use explain::SpecExplainer;
pub use observer::{
    NoopObserver, RecordingObserver, TracingObserver, VerificationEvent, VerificationObserver,
};
pub use orchestrator::VerificationOrchestrator;
pub use report::{compute_audit_hash, VerificationReport};
pub use risk::{RiskAssessment, RiskConfig, RiskScorer, RiskWeights, Severity};
