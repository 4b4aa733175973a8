//! Plain-English rendering of a specification for reviewers.
//!
//! A reporting view only; nothing here feeds an enforcement decision.

use std::fmt::Write;

use specgate_types::AuthorizationSpec;

pub struct SpecExplainer;

impl SpecExplainer {
    pub fn explain(spec: &AuthorizationSpec) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = Self::write_explanation(&mut out, spec);
        out
    }

    fn write_explanation(out: &mut String, spec: &AuthorizationSpec) -> std::fmt::Result {
        writeln!(out, "AUTHORIZATION SPECIFICATION: {}", spec.spec_id)?;
        writeln!(out, "Version: {}", spec.version)?;
        writeln!(out)?;

        writeln!(out, "ALLOWED DATA SOURCES:")?;
        if spec.allowed_inputs.is_empty() {
            writeln!(out, "  - None (the task cannot read any inputs)")?;
        }
        for input in &spec.allowed_inputs {
            writeln!(
                out,
                "  - {}: {} (schema: {})",
                input.source_type.to_uppercase(),
                input.source_id,
                serde_json::Value::Object(input.data_schema.clone())
            )?;
        }
        writeln!(out)?;

        writeln!(out, "FORBIDDEN DATA SOURCES:")?;
        match &spec.forbidden_inputs {
            None => writeln!(out, "  - Not declared")?,
            Some(patterns) if patterns.is_empty() => {
                writeln!(out, "  - None explicitly forbidden")?
            }
            Some(patterns) => {
                for p in patterns {
                    writeln!(
                        out,
                        "  - {}: {} (reason: {})",
                        p.pattern_type, p.pattern_value, p.reason
                    )?;
                }
            }
        }
        writeln!(out)?;

        writeln!(out, "PERMITTED ACTIONS:")?;
        if spec.permitted_actions.is_empty() {
            writeln!(out, "  - None (the task cannot perform any actions)")?;
        }
        for action in &spec.permitted_actions {
            let params = match &action.parameters_schema {
                Some(schema) if !schema.is_empty() => format!(
                    "with parameters {}",
                    serde_json::Value::Object(schema.clone())
                ),
                Some(_) => "with no parameters".to_string(),
                None => "with undeclared parameters".to_string(),
            };
            writeln!(
                out,
                "  - {} on {} {}",
                action.action_type.to_uppercase(),
                action.target_type,
                params
            )?;
        }
        writeln!(out)?;

        writeln!(out, "EXECUTION BOUNDARIES:")?;
        match &spec.execution_scope {
            None => writeln!(out, "  - Not declared")?,
            Some(scope) => {
                writeln!(out, "  - Max iterations: {}", scope.max_iterations)?;
                writeln!(out, "  - Max data size: {}", format_bytes(scope.max_data_size))?;
                writeln!(
                    out,
                    "  - Timeout: {}s ({})",
                    scope.timeout_seconds,
                    format_duration(scope.timeout_seconds)
                )?;
                if !scope.allowed_resources.is_empty() {
                    let resources: Vec<&str> =
                        scope.allowed_resources.iter().map(String::as_str).collect();
                    writeln!(out, "  - Allowed resources: {}", resources.join(", "))?;
                }
            }
        }
        writeln!(out)?;

        writeln!(out, "SUMMARY:")?;
        let inputs: Vec<&str> = spec
            .allowed_inputs
            .iter()
            .map(|i| i.source_id.as_str())
            .collect();
        let actions: Vec<String> = spec
            .permitted_actions
            .iter()
            .map(|a| format!("{}({})", a.action_type, a.target_type))
            .collect();
        let inputs = if inputs.is_empty() {
            "no sources".to_string()
        } else {
            inputs.join(", ")
        };
        let actions = if actions.is_empty() {
            "none".to_string()
        } else {
            actions.join(", ")
        };
        match &spec.execution_scope {
            Some(scope) => write!(
                out,
                "This task may read from {}, perform actions: {}, and execute within {} iterations and a {}s timeout.",
                inputs, actions, scope.max_iterations, scope.timeout_seconds
            ),
            None => write!(
                out,
                "This task may read from {}, perform actions: {}, with no declared execution bounds.",
                inputs, actions
            ),
        }
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} PB")
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        format!("{:.1}m", seconds as f64 / 60.0)
    } else {
        format!("{:.1}h", seconds as f64 / 3600.0)
    }
}
