//! Circularity index: evenness of an arbitrary-length profile vector.
//! Run once per derived vector kind by the aggregator.

use crate::model::config::CircularityConfig;
use crate::model::result::{IndexResult, Reliability, components};
use crate::model::vectors::DERIVED_DIMS;
use crate::stats::{
    clip01, coefficient_of_variation, compress_to_unit, mean, soft_clamp01, to_percent,
    top_k_indices,
};

pub fn compute_circularity(vector: &[f32], cfg: &CircularityConfig) -> IndexResult {
    let m = mean(vector);
    let cv = coefficient_of_variation(vector);

    let mut circ = 1.0 - (cv / cfg.kappa).min(1.0);
    circ = compress_to_unit(circ, cfg.compress_k);
    circ = soft_clamp01(circ, 0.05, 0.98);

    let mean01 = clip01(m / 100.0);
    let kind = match (circ >= 0.5, mean01 >= 0.5) {
        (true, true) => "balanced/strong",
        (true, false) => "balanced/weak",
        (false, true) => "sharp/uneven",
        (false, false) => "weak/unbalanced",
    };

    let diffs = vector.iter().map(|x| x - m).collect::<Vec<_>>();
    let mut signals = top_k_indices(&diffs, 2, false)
        .into_iter()
        .map(|i| format!("spike #{}", i + 1))
        .collect::<Vec<_>>();
    signals.extend(
        top_k_indices(&diffs, 2, true)
            .into_iter()
            .map(|i| format!("dip #{}", i + 1)),
    );

    let reliability = if vector.len() >= DERIVED_DIMS {
        Reliability::High
    } else {
        Reliability::Mid
    };

    IndexResult::new(
        to_percent(circ),
        components(&[("mean_value", mean01), ("cv", clip01(cv))]),
        kind,
        signals,
        reliability,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/circularity.rs"]
mod tests;
