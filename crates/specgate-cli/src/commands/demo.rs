//! `specgate demo`: compliant, violating and adversarial tasks under enforcement.

use std::sync::Arc;

use serde_json::json;
use specgate_runtime::{Enforcer, ExecutionCategory, MonitoredContext, TaskError};
use specgate_types::{
    AllowedInput, AuthorizationSpec, ExecutionScope, PermittedAction, Schema, SpecError,
};
use specgate_verify::SpecExplainer;

use crate::output::{print_result, print_section};

/// Build the demo spec: read `database/users_table`, produce `read/summary`.
pub fn demo_spec(max_data_size: u64) -> Result<Arc<AuthorizationSpec>, SpecError> {
    let mut schema = Schema::new();
    schema.insert("columns".into(), json!(["id", "name"]));

    let scope = ExecutionScope::new(3, max_data_size, 60)?.with_allowed_resources(["database"]);

    Ok(AuthorizationSpec::builder("demo-spec-001", "1.0")
        .allow_input(AllowedInput::new("database", "users_table").with_schema(schema))
        .no_forbidden_inputs()
        .permit(PermittedAction::new("read", "summary"))
        .scope(scope)
        .build_shared())
}

/// Stays inside every boundary.
pub fn compliant_task(ctx: &mut MonitoredContext) -> Result<String, TaskError> {
    ctx.tick()?;
    let data = ctx.read_input("database", "users_table")?;
    ctx.perform_action("read", "summary")?;
    Ok(format!("Processed {data}"))
}

/// Reads a source the spec never declared.
pub fn violating_task(ctx: &mut MonitoredContext) -> Result<String, TaskError> {
    ctx.tick()?;
    let data = ctx.read_input("database", "passwords_table")?;
    Ok(format!("Processed {data}"))
}

/// Starts like the compliant task, then loops past `max_iterations`.
pub fn adversarial_iteration_task(ctx: &mut MonitoredContext) -> Result<String, TaskError> {
    ctx.tick()?;
    let data = ctx.read_input("database", "users_table")?;
    ctx.perform_action("read", "summary")?;
    for _ in 0..4 {
        ctx.tick()?;
    }
    Ok(format!("Processed {data}"))
}

/// Re-reads an allowed source until the cumulative byte budget runs out.
pub fn adversarial_data_size_task(ctx: &mut MonitoredContext) -> Result<String, TaskError> {
    ctx.tick()?;
    for _ in 0..50 {
        ctx.read_input("database", "users_table")?;
    }
    Ok("Should not reach here".to_string())
}

type DemoTask = fn(&mut MonitoredContext) -> Result<String, TaskError>;

struct Scenario {
    title: &'static str,
    label: &'static str,
    max_data_size: u64,
    task: DemoTask,
    expected: ExecutionCategory,
}

fn scenarios() -> [Scenario; 4] {
    [
        Scenario {
            title: "TEST 1: COMPLIANT TASK (Should Pass)",
            label: "Compliant Task",
            max_data_size: 1_000_000,
            task: compliant_task,
            expected: ExecutionCategory::Success,
        },
        Scenario {
            title: "TEST 2: VIOLATING TASK (Should Fail)",
            label: "Violating Task",
            max_data_size: 1_000_000,
            task: violating_task,
            expected: ExecutionCategory::RuntimeViolation,
        },
        Scenario {
            title: "TEST 3: ADVERSARIAL ITERATION TASK (Should Fail)",
            label: "Adversarial Iteration Task",
            max_data_size: 1_000_000,
            task: adversarial_iteration_task,
            expected: ExecutionCategory::RuntimeViolation,
        },
        Scenario {
            title: "TEST 4: ADVERSARIAL DATA SIZE TASK (Should Fail)",
            label: "Adversarial Data Size Task",
            max_data_size: 1_000,
            task: adversarial_data_size_task,
            expected: ExecutionCategory::RuntimeViolation,
        },
    ]
}

/// Run every scenario. Returns whether each one ended as expected.
pub fn execute(enforcer: &Enforcer) -> Result<bool, SpecError> {
    print_section("AUTHORIZED TASK EXECUTION DEMO");
    print!("{}", SpecExplainer::explain(&*demo_spec(1_000_000)?));

    let mut all_expected = true;
    for scenario in scenarios() {
        print_section(scenario.title);
        let result = enforcer.execute(demo_spec(scenario.max_data_size)?, scenario.task);
        print_result(scenario.label, &result);
        all_expected &= result.category() == scenario.expected;
    }
    Ok(all_expected)
}
