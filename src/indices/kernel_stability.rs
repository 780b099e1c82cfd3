//! Kernel-stability index: agreement across answer sources, steadiness of
//! the recent history, and inverse context load.

use crate::input::normalize::NormalizedPayload;
use crate::model::config::KernelStabilityWeights;
use crate::model::result::{IndexResult, Reliability, components};
use crate::model::vectors::TRAIT_DIMS;
use crate::stats::{
    clip01, compress_to_unit, mean, median_abs_deviation, soft_clamp01, stdev, to_percent,
    top_k_indices,
};

const TIME_CONSISTENCY_PRIOR: f32 = 0.6;

pub fn compute_kernel_stability(
    payload: &NormalizedPayload,
    cfg: &KernelStabilityWeights,
) -> IndexResult {
    // Cross-source agreement per trait dimension, on the [0,1] scale.
    let per_dim_std = (0..TRAIT_DIMS)
        .map(|j| {
            stdev(
                &payload
                    .sources
                    .iter()
                    .map(|v| v[j] / 100.0)
                    .collect::<Vec<_>>(),
            )
        })
        .collect::<Vec<_>>();
    let source_consistency = 1.0 - (mean(&per_dim_std) / cfg.sigma0).min(1.0);

    // Steadiness of recent environment means; with fewer than two history
    // entries there is nothing to compare, fall back to the prior.
    let time_consistency = if payload.history.len() >= 2 {
        let means = payload
            .history
            .iter()
            .map(|v| mean(v) / 100.0)
            .collect::<Vec<_>>();
        1.0 - (median_abs_deviation(&means) / cfg.mad0).min(1.0)
    } else {
        TIME_CONSISTENCY_PRIOR
    };

    let context_load = 1.0 - (payload.entropy_hint / 100.0).min(1.0);

    let mut x = clip01(
        cfg.source_weight * source_consistency
            + cfg.time_weight * time_consistency
            + cfg.context_weight * context_load,
    );
    x = compress_to_unit(x, cfg.compress_k);
    x = soft_clamp01(x, 0.08, 0.98);

    let kind = if x >= 0.75 {
        "highly stable/perturbation-resistant"
    } else if x >= 0.55 {
        "moderately stable/load-bearing"
    } else {
        "low stability/sensitive"
    };

    let noisiest = top_k_indices(&per_dim_std, 1, false)
        .first()
        .copied()
        .unwrap_or(0);
    let signals = vec![format!(
        "cross-source variance peaks in dimension #{}",
        noisiest + 1
    )];

    let reliability = if payload.sources.len() >= 3 {
        Reliability::High
    } else {
        Reliability::Mid
    };

    IndexResult::new(
        to_percent(x),
        components(&[
            ("source_consistency", to_percent(source_consistency) as f32),
            ("time_consistency", to_percent(time_consistency) as f32),
            ("context_load", to_percent(context_load) as f32),
        ]),
        kind,
        signals,
        reliability,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/kernel_stability.rs"]
mod tests;
