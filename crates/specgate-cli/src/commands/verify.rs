//! `specgate verify`

use std::path::Path;

use specgate_verify::VerificationOrchestrator;
use tracing::info;

use crate::commands::load_spec;
use crate::error::CliResult;
use crate::output::{print_error, print_report, print_success};

/// Verify a spec file. Returns whether verification passed.
pub fn execute(path: &Path, json: bool, orchestrator: &VerificationOrchestrator) -> CliResult<bool> {
    let spec = load_spec(path)?;
    info!(spec_id = %spec.spec_id, path = %path.display(), "Verifying spec file");

    let report = orchestrator.verify(&spec);

    if json {
        println!("{}", report.to_audit_json()?);
        return Ok(report.passed);
    }

    print_report(&report);
    println!();
    if report.passed {
        print_success(&format!("Spec '{}' may be executed", spec.spec_id));
    } else {
        print_error(&format!(
            "Spec '{}' rejected: {}",
            spec.spec_id,
            report.failure_reason.as_deref().unwrap_or("verification failed")
        ));
    }
    Ok(report.passed)
}
