use super::*;
use crate::model::config::EngineConfig;

fn cfg() -> CircularityConfig {
    EngineConfig::default_v1().circularity
}

#[test]
fn test_uniform_strong_vector_is_balanced_strong() {
    let r = compute_circularity(&[70.0; 8], &cfg());
    // cv 0 -> circ 1 pre-compression, 0.9 after.
    assert_eq!(r.value, 90);
    assert_eq!(r.kind, "balanced/strong");
    assert_eq!(r.components["cv"], 0.0);
    assert_eq!(r.reliability, Reliability::High);
}

#[test]
fn test_uniform_weak_vector_is_balanced_weak() {
    let r = compute_circularity(&[30.0; 8], &cfg());
    assert_eq!(r.value, 90);
    assert_eq!(r.kind, "balanced/weak");
}

#[test]
fn test_spiky_vector_is_sharp_uneven() {
    let r = compute_circularity(&[90.0, 10.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0], &cfg());
    // stdev 20 over mean 50: cv 0.4 exceeds kappa, circ bottoms out.
    assert_eq!(r.value, 10);
    assert_eq!(r.kind, "sharp/uneven");
}

#[test]
fn test_signals_label_spikes_and_dips_one_indexed() {
    let r = compute_circularity(&[90.0, 10.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0], &cfg());
    assert_eq!(r.signals[0], "spike #1");
    assert_eq!(r.signals[1], "spike #3");
    assert_eq!(r.signals[2], "dip #2");
    assert_eq!(r.signals[3], "dip #3");
}

#[test]
fn test_short_vector_drops_to_mid_reliability() {
    let r = compute_circularity(&[60.0, 70.0, 55.0, 65.0, 58.0], &cfg());
    assert_eq!(r.reliability, Reliability::Mid);
    assert!(r.value <= 100);
}

#[test]
fn test_empty_vector_is_defined() {
    let r = compute_circularity(&[], &cfg());
    // Empty mean is 0, cv short-circuits to 0: maximally even, weak.
    assert_eq!(r.value, 90);
    assert_eq!(r.kind, "balanced/weak");
    assert!(r.signals.is_empty());
}

#[test]
fn test_kappa_override_changes_sensitivity() {
    let vector = [60.0, 40.0, 55.0, 45.0, 58.0, 42.0, 57.0, 43.0];
    let strict = compute_circularity(
        &vector,
        &CircularityConfig {
            kappa: 0.05,
            compress_k: 0.8,
        },
    );
    let lenient = compute_circularity(&vector, &cfg());
    assert!(strict.value < lenient.value);
}
