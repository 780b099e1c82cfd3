use super::*;
use crate::input::RawPayload;
use crate::input::normalize::{NormalizedPayload, normalize};
use crate::mapper::{BuiltinMapper, MaskingOutcome};
use crate::model::config::EngineConfig;

fn payload(json: &str) -> NormalizedPayload {
    let raw: RawPayload = serde_json::from_str(json).unwrap();
    normalize(&raw, &BuiltinMapper)
}

fn cfg() -> DifferenceWeights {
    EngineConfig::default_v1().difference
}

struct FixedMasking;

impl MaskingModel for FixedMasking {
    fn compute(&self, inputs: &MaskingInputs<'_>) -> MaskingOutcome {
        assert_eq!(inputs.ecology16.len(), 16);
        MaskingOutcome {
            masking_score: 72.0,
            alignment_gap: 61.0,
            intentionality: 44.0,
            cost: 38.0,
            label: "strategic masking".to_string(),
            signals: vec!["gap widest in public settings".to_string()],
        }
    }
}

#[test]
fn test_identical_vectors_yield_mild_difference() {
    let p = payload(r#"{"bf_self":[60,55,70,40,30],"bf_env":[60,55,70,40,30]}"#);
    let r = compute_difference(&p, None, &cfg());
    // raw = 0 pre-compression; compression centers it at 0.15.
    assert_eq!(r.value, 15);
    assert_eq!(r.kind, "mild difference/normal presentation");
    assert_eq!(r.components["l1"], 0.0);
    assert_eq!(r.components["one_minus_cos"], 0.0);
    assert_eq!(r.reliability, Reliability::Mid);
}

#[test]
fn test_default_vectors_lower_reliability() {
    let p = payload("{}");
    let r = compute_difference(&p, None, &cfg());
    assert_eq!(r.reliability, Reliability::Low);
    assert_eq!(r.kind, "mild difference/normal presentation");
}

#[test]
fn test_opposed_vectors_read_as_strategic() {
    let p = payload(r#"{"bf_self":[100,100,100,100,100],"bf_env":[0,0,0,0,0]}"#);
    let r = compute_difference(&p, None, &cfg());
    assert_eq!(r.value, 95);
    assert_eq!(r.kind, "significant difference/strategic presentation");
}

#[test]
fn test_value_always_bounded() {
    for json in [
        "{}",
        r#"{"bf_self":[0,100,0,100,0],"bf_env":[100,0,100,0,100]}"#,
        r#"{"bf_self":[55,45,60,40,50]}"#,
    ] {
        let r = compute_difference(&payload(json), None, &cfg());
        assert!(r.value <= 100);
    }
}

#[test]
fn test_masking_capability_takes_priority() {
    let p = payload(
        r#"{"bf_self":[60,55,70,40,30],"bf_env":[55,60,65,45,35],
            "struct_self8":[60,62,58,61,59,63,57,60],"struct8":[70,71,69,72,68,73,67,70]}"#,
    );
    let r = compute_difference(&p, Some(&FixedMasking), &cfg());
    assert_eq!(r.value, 72);
    assert_eq!(r.kind, "strategic masking");
    assert_eq!(r.signals, vec!["gap widest in public settings".to_string()]);
    assert_eq!(r.components["align_gap"], 61.0);
    assert_eq!(r.components["intentionality"], 44.0);
    assert_eq!(r.components["cost"], 38.0);
    assert_eq!(r.reliability, Reliability::High);
}

#[test]
fn test_masking_with_default_structural_self_is_low_reliability() {
    // No struct_self8 supplied: the masking verdict rests on a default.
    let p = payload(r#"{"bf_self":[60,55,70,40,30],"bf_env":[55,60,65,45,35]}"#);
    let r = compute_difference(&p, Some(&FixedMasking), &cfg());
    assert_eq!(r.reliability, Reliability::Low);
}
