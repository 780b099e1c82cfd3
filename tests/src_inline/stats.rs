use super::*;

#[test]
fn test_mean_empty_is_zero() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
}

#[test]
fn test_stdev_is_population() {
    // Sample stdev would be sqrt(2); population is 1.
    assert!((stdev(&[2.0, 4.0]) - 1.0).abs() < 1e-6);
    assert_eq!(stdev(&[]), 0.0);
}

#[test]
fn test_cv_zero_mean_short_circuits() {
    // Zero-centered data bypasses the epsilon guard by design.
    assert_eq!(coefficient_of_variation(&[-1.0, 1.0]), 0.0);
    let cv = coefficient_of_variation(&[2.0, 4.0]);
    assert!((cv - 1.0 / 3.0).abs() < 1e-4);
}

#[test]
fn test_mad_lower_median_for_even_counts() {
    // mean 2.5, sorted deviations [0.5, 0.5, 1.5, 1.5] -> lower median 0.5
    assert!((median_abs_deviation(&[1.0, 2.0, 3.0, 4.0]) - 0.5).abs() < 1e-6);
    // mean 3, sorted deviations [1, 2, 3] -> 2
    assert!((median_abs_deviation(&[1.0, 2.0, 6.0]) - 2.0).abs() < 1e-6);
    assert_eq!(median_abs_deviation(&[]), 0.0);
}

#[test]
fn test_clip_compress_softclamp_ranges() {
    assert_eq!(clip01(-0.5), 0.0);
    assert_eq!(clip01(1.5), 1.0);
    assert!((compress_to_unit(0.25, 0.7) - 0.325).abs() < 1e-6);
    assert_eq!(compress_to_unit(0.5, 0.7), 0.5);
    for x in [-1.0f32, 0.0, 0.03, 0.5, 0.96, 2.0] {
        let y = soft_clamp01(x, 0.05, 0.95);
        assert!((0.05..=0.95).contains(&y));
    }
}

#[test]
fn test_to_percent_is_bounded_integer() {
    assert_eq!(to_percent(0.456), 46);
    assert_eq!(to_percent(-3.0), 0);
    assert_eq!(to_percent(7.0), 100);
}

#[test]
fn test_is_default_vector_tolerance() {
    assert!(is_default_vector(&[]));
    assert!(is_default_vector(&[50.0, 51.5, 48.5]));
    assert!(!is_default_vector(&[50.0, 52.0]));
}

#[test]
fn test_top_k_indices_stable_ties() {
    let xs = [1.0, 3.0, 3.0, 2.0];
    assert_eq!(top_k_indices(&xs, 2, false), vec![1, 2]);
    assert_eq!(top_k_indices(&xs, 2, true), vec![0, 3]);
    assert_eq!(top_k_indices(&xs, 10, false).len(), 4);
    assert!(top_k_indices(&[], 2, false).is_empty());
}

#[test]
fn test_cosine_similarity_edge_vectors() {
    assert!((cosine_similarity(&[1.0, 2.0], &[1.0, 2.0]) - 1.0).abs() < 1e-6);
    assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    // Two silent vectors are identical, one silent vector is incomparable.
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 1.0);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
}

#[test]
fn test_cosine01_maps_into_unit_interval() {
    assert!((cosine01(&[1.0, 0.0], &[-1.0, 0.0])).abs() < 1e-6);
    assert!((cosine01(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
}
