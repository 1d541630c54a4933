//! Integration tests for the fault-injection decision engine
//!
//! Covers the end-to-end decision contract: eligibility, sampling bounds,
//! exact synthetic responses, statistical convergence, and counter
//! behavior under concurrent calls.

use std::sync::Arc;

use application::{FaultEngine, FixedPolicyProvider, apply_decision};
use domain::value_objects::{FailureKind, FailureRate};
use domain::{Decision, FaultPolicy, FaultResponse};

fn engine_with(policy: FaultPolicy) -> FaultEngine {
    FaultEngine::new(Arc::new(FixedPolicyProvider::new(policy))).expect("matcher builds")
}

#[test]
fn unmatched_hosts_always_pass_through() {
    let engine = engine_with(FaultPolicy::always(FailureKind::ServerError));
    for host in ["example.com", "api.openai.com", "localhost", ""] {
        assert_eq!(engine.decide(host), Decision::PassThrough);
    }
    assert_eq!(engine.request_count(), 0);
}

#[test]
fn auth_error_scenario_on_anthropic_host() {
    // config {failure_rate: "1.0", failure_types: "auth_error"}
    let policy = FaultPolicy::new(
        "1.0".parse().expect("valid rate"),
        vec!["auth_error".parse().expect("known kind")],
        vec!["anthropic.com".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    assert_eq!(
        engine.decide("api.anthropic.com"),
        Decision::Respond(FaultResponse {
            status: 401,
            content_type: "application/json",
            body: r#"{"error": {"message": "Invalid API key", "type": "authentication_error"}}"#,
        })
    );
}

#[test]
fn network_error_scenario_on_together_host() {
    // config {failure_rate: "1.0", failure_types: "network_error"}
    let policy = FaultPolicy::new(
        FailureRate::ALWAYS,
        vec![FailureKind::NetworkError],
        vec!["together.xyz".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    assert_eq!(engine.decide("together.xyz"), Decision::Abort);
}

#[test]
fn zero_rate_never_injects_over_many_calls() {
    let engine = engine_with(FaultPolicy::never());
    for _ in 0..1_000 {
        assert_eq!(engine.decide("openrouter.ai"), Decision::PassThrough);
    }
    assert_eq!(engine.request_count(), 1_000);
    assert_eq!(engine.stats().injected, 0);
}

#[test]
fn full_rate_injects_every_call() {
    let policy = FaultPolicy::new(
        FailureRate::ALWAYS,
        FailureKind::ALL.to_vec(),
        vec!["anthropic.com".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    for _ in 0..1_000 {
        assert!(engine.decide("api.anthropic.com").is_injected());
    }
    assert_eq!(engine.stats().injected, 1_000);
    assert_eq!(engine.stats().passed, 0);
}

#[test]
fn observed_rate_converges_to_configured_rate() {
    const CALLS: u64 = 10_000;
    const RATE: f64 = 0.3;

    let policy = FaultPolicy::new(
        FailureRate::new(RATE).expect("valid rate"),
        FailureKind::ALL.to_vec(),
        vec!["anthropic.com".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    for _ in 0..CALLS {
        engine.decide("api.anthropic.com");
    }

    let stats = engine.stats();
    assert_eq!(stats.matched, CALLS);
    let observed = stats.observed_failure_rate();
    assert!(
        (observed - RATE).abs() < 0.02,
        "observed rate {observed} not within 0.02 of {RATE}"
    );
}

#[test]
fn counter_is_monotonic_under_concurrent_calls() {
    const THREADS: u64 = 8;
    const CALLS_PER_THREAD: u64 = 1_000;

    let policy = FaultPolicy::new(
        FailureRate::new(0.5).expect("valid rate"),
        FailureKind::ALL.to_vec(),
        vec!["anthropic.com".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..CALLS_PER_THREAD {
                    engine.decide("api.anthropic.com");
                }
            });
        }
    });

    // Atomic increments: no lost updates.
    assert_eq!(engine.request_count(), THREADS * CALLS_PER_THREAD);
    let stats = engine.stats();
    assert_eq!(stats.matched, THREADS * CALLS_PER_THREAD);
    assert_eq!(stats.passed + stats.injected, stats.matched);
}

#[test]
fn duplicate_kinds_bias_selection() {
    const CALLS: u64 = 10_000;

    // Three rate_limit entries against one server_error: expect roughly 3:1.
    let policy = FaultPolicy::new(
        FailureRate::ALWAYS,
        vec![
            FailureKind::RateLimit,
            FailureKind::RateLimit,
            FailureKind::RateLimit,
            FailureKind::ServerError,
        ],
        vec!["anthropic.com".to_string()],
    )
    .expect("valid policy");
    let engine = engine_with(policy);

    for _ in 0..CALLS {
        engine.decide("api.anthropic.com");
    }

    let stats = engine.stats();
    #[allow(clippy::cast_precision_loss)]
    let rate_limit_share = stats.per_kind[0] as f64 / CALLS as f64;
    assert!(
        (rate_limit_share - 0.75).abs() < 0.03,
        "rate_limit share {rate_limit_share} not near 0.75"
    );
}

#[test]
fn decisions_drive_flow_actions() {
    // A minimal recording host, standing in for the interception runtime.
    #[derive(Default)]
    struct RecordingFlow {
        responses: Vec<(u16, &'static str)>,
        aborted: bool,
    }

    impl application::FlowActions for RecordingFlow {
        fn respond(&mut self, status: u16, _content_type: &'static str, body: &'static str) {
            self.responses.push((status, body));
        }

        fn abort(&mut self) {
            self.aborted = true;
        }
    }

    let engine = engine_with(FaultPolicy::always(FailureKind::InvalidRequest));
    let mut flow = RecordingFlow::default();

    apply_decision(engine.decide("api.anthropic.com"), &mut flow);
    assert!(!flow.aborted);
    assert_eq!(flow.responses.len(), 1);
    assert_eq!(flow.responses[0].0, 400);
    assert!(flow.responses[0].1.contains("invalid_request_error"));

    apply_decision(engine.decide("example.com"), &mut flow);
    assert_eq!(flow.responses.len(), 1, "pass-through must not respond");
}
