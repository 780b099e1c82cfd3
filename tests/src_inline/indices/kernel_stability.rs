use super::*;
use crate::input::RawPayload;
use crate::input::normalize::normalize;
use crate::mapper::BuiltinMapper;
use crate::model::config::EngineConfig;

fn payload(json: &str) -> NormalizedPayload {
    let raw: RawPayload = serde_json::from_str(json).unwrap();
    normalize(&raw, &BuiltinMapper)
}

fn cfg() -> KernelStabilityWeights {
    EngineConfig::default_v1().kernel_stability
}

#[test]
fn test_single_source_quiet_context_is_stable() {
    let p = payload(r#"{"bf_self":[60,55,70,40,30]}"#);
    let r = compute_kernel_stability(&p, &cfg());
    // source 1.0, time prior 0.6, context 1.0 -> 0.88, compressed to 0.785
    assert!((75..=85).contains(&r.value), "value was {}", r.value);
    assert_eq!(r.kind, "highly stable/perturbation-resistant");
    assert_eq!(r.reliability, Reliability::Mid);
    assert_eq!(r.components["source_consistency"], 100.0);
    assert_eq!(r.components["context_load"], 100.0);
}

#[test]
fn test_three_sources_raise_reliability() {
    let p = payload(
        r#"{"bf_self":[60,55,70,40,30],"bf_s2":[58,56,68,42,32],"bf_s3":[62,54,72,38,28]}"#,
    );
    let r = compute_kernel_stability(&p, &cfg());
    assert_eq!(r.reliability, Reliability::High);
}

#[test]
fn test_divergent_sources_floor_source_consistency() {
    let p = payload(r#"{"bf_self":[0,0,0,0,0],"bf_s2":[100,100,100,100,100]}"#);
    let r = compute_kernel_stability(&p, &cfg());
    // per-dimension stdev is 0.5, far past sigma0.
    assert_eq!(r.components["source_consistency"], 0.0);
    assert_eq!(r.kind, "low stability/sensitive");
}

#[test]
fn test_entropy_erases_context_headroom() {
    let calm = compute_kernel_stability(&payload(r#"{"bf_self":[60,55,70,40,30]}"#), &cfg());
    let loaded = compute_kernel_stability(
        &payload(r#"{"bf_self":[60,55,70,40,30],"entropy_hint":100}"#),
        &cfg(),
    );
    assert_eq!(loaded.components["context_load"], 0.0);
    assert!(loaded.value < calm.value);
}

#[test]
fn test_history_mad_feeds_time_consistency() {
    let p = payload(
        r#"{"bf_self":[60,55,70,40,30],
            "history":[{"bf_env":[50,50,50,50,50]},{"bf_env":[60,60,60,60,60]},{"bf_env":[40,40,40,40,40]}]}"#,
    );
    let r = compute_kernel_stability(&p, &cfg());
    // means 0.5/0.6/0.4 -> MAD 0.1 -> 1 - 0.1/0.15 = 1/3
    assert_eq!(r.components["time_consistency"], 33.0);
}

#[test]
fn test_short_history_uses_prior() {
    let p = payload(r#"{"bf_self":[60,55,70,40,30],"history":[{"bf_env":[60,60,60,60,60]}]}"#);
    let r = compute_kernel_stability(&p, &cfg());
    assert_eq!(r.components["time_consistency"], 60.0);
}

#[test]
fn test_signal_names_noisiest_dimension() {
    let p = payload(r#"{"bf_self":[50,50,20,50,50],"bf_s2":[50,50,90,50,50]}"#);
    let r = compute_kernel_stability(&p, &cfg());
    assert_eq!(
        r.signals,
        vec!["cross-source variance peaks in dimension #3".to_string()]
    );
}
