//! Output formatting utilities

use colored::*;
use specgate_runtime::ExecutionResult;
use specgate_verify::VerificationReport;

/// Print a visually distinct section header
pub fn print_section(title: &str) {
    println!();
    println!("{}", "=".repeat(70));
    println!("  {}", title.bold());
    println!("{}", "=".repeat(70));
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Human-readable verification report
pub fn print_report(report: &VerificationReport) {
    let status = if report.passed {
        "PASSED".green().bold()
    } else {
        "FAILED".red().bold()
    };
    println!("Verification: {}", status);
    println!("  Timestamp:  {}", report.timestamp.to_rfc3339());
    println!("  Audit hash: {}", report.audit_hash.dimmed());
    println!();

    for result in &report.checker_results {
        let mark = if result.passed { "✓".green() } else { "✗".red() };
        println!("  {} {}", mark, result.checker_name);
        for violation in &result.violations {
            println!("      - {}", violation);
        }
    }

    if let Some(risk) = &report.risk_assessment {
        println!();
        println!(
            "Risk: {:.2} ({})",
            risk.overall_risk,
            risk.severity.as_str().yellow()
        );
        for factor in &risk.risk_factors {
            println!("  - {}", factor);
        }
        println!("Recommendations:");
        for rec in &risk.recommendations {
            println!("  - {}", rec);
        }
    }
}

/// Human-readable execution result
pub fn print_result<T: std::fmt::Display>(label: &str, result: &ExecutionResult<T>) {
    println!("[{}]", label);
    match result {
        ExecutionResult::Success { value } => {
            println!("  Status: {}", "✓ SUCCESS".green());
            println!("  Result: {}", value);
        }
        other => {
            println!("  Status: {}", "✗ FAILED".red());
            println!("  Error: {}", other.category());
            println!("  Details: {}", other.detail().unwrap_or_default());
        }
    }
}
