use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specgate_types::{AllowedInput, AuthorizationSpec, ExecutionScope, ForbiddenPattern, PermittedAction};
use specgate_verify::{NoopObserver, RiskScorer, SpecExplainer, VerificationOrchestrator};

fn perf_spec() -> AuthorizationSpec {
    AuthorizationSpec::builder("perf-test-1", "1.0")
        .allowed_inputs(
            (0..5)
                .map(|i| AllowedInput::new("db", format!("table_{i}")))
                .collect(),
        )
        .forbid(ForbiddenPattern::wildcard("secret_*", "secrets"))
        .permit(PermittedAction::new("read", "summary"))
        .permit(PermittedAction::new("write", "log"))
        .scope(ExecutionScope::with_iterations(100).unwrap())
        .build()
}

fn bench_verification(c: &mut Criterion) {
    let spec = perf_spec();
    let orchestrator = VerificationOrchestrator::new().with_observer(Arc::new(NoopObserver));

    c.bench_function("verify_full_battery", |b| {
        b.iter(|| orchestrator.verify(black_box(&spec)))
    });

    let scorer = RiskScorer::new();
    c.bench_function("score_spec", |b| b.iter(|| scorer.score_spec(black_box(&spec))));

    c.bench_function("explain_spec", |b| {
        b.iter(|| SpecExplainer::explain(black_box(&spec)))
    });
}

criterion_group!(benches, bench_verification);
criterion_main!(benches);
