//! Property tests: risk is bounded and monotonic in every input.

use proptest::prelude::*;
use specgate_types::{AllowedInput, AuthorizationSpec, ExecutionScope, PermittedAction};
use specgate_verify::{RiskScorer, Severity};

#[derive(Clone, Debug)]
struct Shape {
    iterations: u64,
    data_size: u64,
    timeout: u64,
    inputs: usize,
    actions: usize,
}

fn build(shape: &Shape) -> AuthorizationSpec {
    AuthorizationSpec::builder("prop", "1.0")
        .allowed_inputs(
            (0..shape.inputs)
                .map(|i| AllowedInput::new("db", format!("table_{i}")))
                .collect(),
        )
        .no_forbidden_inputs()
        .permitted_actions(
            (0..shape.actions)
                .map(|i| PermittedAction::new("read", format!("target_{i}")))
                .collect(),
        )
        .scope(ExecutionScope::new(shape.iterations, shape.data_size, shape.timeout).unwrap())
        .build()
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (
        1u64..50_000,
        1u64..(4 * 1024 * 1024 * 1024),
        1u64..10_000,
        0usize..25,
        0usize..30,
    )
        .prop_map(|(iterations, data_size, timeout, inputs, actions)| Shape {
            iterations,
            data_size,
            timeout,
            inputs,
            actions,
        })
}

fn risk(shape: &Shape) -> f64 {
    RiskScorer::new().score_spec(&build(shape)).overall_risk
}

proptest! {
    #[test]
    fn risk_always_in_unit_interval(shape in arb_shape()) {
        let assessment = RiskScorer::new().score_spec(&build(&shape));
        prop_assert!((0.0..=1.0).contains(&assessment.overall_risk));
        prop_assert!(!assessment.risk_factors.is_empty());
        prop_assert!(!assessment.recommendations.is_empty());
        prop_assert_eq!(assessment.severity, Severity::from_score(assessment.overall_risk));
    }

    #[test]
    fn monotonic_in_iterations(shape in arb_shape(), extra in 0u64..50_000) {
        let bigger = Shape { iterations: shape.iterations + extra, ..shape.clone() };
        prop_assert!(risk(&bigger) >= risk(&shape));
    }

    #[test]
    fn monotonic_in_data_size(shape in arb_shape(), extra in 0u64..(2 * 1024 * 1024 * 1024)) {
        let bigger = Shape { data_size: shape.data_size + extra, ..shape.clone() };
        prop_assert!(risk(&bigger) >= risk(&shape));
    }

    #[test]
    fn monotonic_in_timeout(shape in arb_shape(), extra in 0u64..10_000) {
        let bigger = Shape { timeout: shape.timeout + extra, ..shape.clone() };
        prop_assert!(risk(&bigger) >= risk(&shape));
    }

    #[test]
    fn monotonic_in_input_count(shape in arb_shape(), extra in 0usize..15) {
        let bigger = Shape { inputs: shape.inputs + extra, ..shape.clone() };
        prop_assert!(risk(&bigger) >= risk(&shape));
    }

    #[test]
    fn monotonic_in_action_count(shape in arb_shape(), extra in 0usize..15) {
        let bigger = Shape { actions: shape.actions + extra, ..shape.clone() };
        prop_assert!(risk(&bigger) >= risk(&shape));
    }
}
