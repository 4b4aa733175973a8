use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specgate_runtime::{Enforcer, MonitoredContext};
use specgate_types::{AllowedInput, AuthorizationSpec, ExecutionScope, PermittedAction};
use specgate_verify::{NoopObserver, VerificationOrchestrator};
use std::sync::Arc;

fn bench_spec() -> Arc<AuthorizationSpec> {
    AuthorizationSpec::builder("bench", "1.0")
        .allow_input(AllowedInput::new("database", "users_table"))
        .no_forbidden_inputs()
        .permit(PermittedAction::new("read", "summary"))
        .scope(ExecutionScope::new(10_000, 10_000_000, 300).unwrap())
        .build_shared()
}

fn bench_context_ops(c: &mut Criterion) {
    let spec = bench_spec();
    c.bench_function("context_read_tick_act", |b| {
        b.iter(|| {
            let mut ctx = MonitoredContext::new(spec.clone()).unwrap();
            for _ in 0..100 {
                ctx.tick().unwrap();
                black_box(ctx.read_input("database", "users_table").unwrap());
                ctx.perform_action("read", "summary").unwrap();
            }
        })
    });
}

fn bench_enforced_execution(c: &mut Criterion) {
    let spec = bench_spec();
    let enforcer = Enforcer::with_orchestrator(
        VerificationOrchestrator::new().with_observer(Arc::new(NoopObserver)),
    );
    c.bench_function("enforcer_execute", |b| {
        b.iter(|| {
            enforcer.execute(spec.clone(), |ctx| {
                ctx.tick()?;
                let data = ctx.read_input("database", "users_table")?;
                ctx.perform_action("read", "summary")?;
                Ok(data.len())
            })
        })
    });
}

criterion_group!(benches, bench_context_ops, bench_enforced_execution);
criterion_main!(benches);
