//! Perfection index (published as "completeness"): baseline coverage per
//! dimension, worst-dimension drag, and a dispersion penalty.

use crate::model::config::PerfectionThresholds;
use crate::model::result::{IndexResult, Reliability, components};
use crate::model::vectors::DERIVED_DIMS;
use crate::stats::{
    CV_EPS, clip01, coefficient_of_variation, compress_to_unit, mean, soft_clamp01, to_percent,
};

struct Shortfall {
    name: String,
    value: i32,
    target: i32,
    gap: i32,
}

pub fn compute_perfection(vector: &[f32], cfg: &PerfectionThresholds) -> IndexResult {
    let v01 = vector.iter().map(|x| clip01(x / 100.0)).collect::<Vec<_>>();

    let names = (0..v01.len())
        .map(|i| dimension_name(cfg, i))
        .collect::<Vec<_>>();
    let targets = names
        .iter()
        .map(|name| {
            cfg.targets
                .get(name.as_str())
                .copied()
                .unwrap_or(cfg.default_target)
        })
        .collect::<Vec<_>>();

    // Coverage is 0 at x == T: a dimension sitting exactly on its target
    // has not yet exceeded it.
    let coverage = v01
        .iter()
        .zip(&targets)
        .map(|(x, t)| clip01((x - t) / (1.0 - t + CV_EPS)))
        .collect::<Vec<_>>();

    let cov_mean = mean(&coverage);
    let worst = coverage.iter().copied().fold(f32::INFINITY, f32::min);
    let worst = if worst.is_finite() { worst } else { 0.0 };
    let spread = coefficient_of_variation(&v01);

    let mut x = clip01(
        cfg.mean_weight * cov_mean
            + cfg.worst_weight * worst
            + cfg.spread_weight * (1.0 - (spread / cfg.cv0).min(1.0)),
    );
    x = compress_to_unit(x, cfg.compress_k);
    x = soft_clamp01(x, 0.05, 0.97);

    let mut shortfalls = names
        .iter()
        .zip(&v01)
        .zip(&targets)
        .map(|((name, v), t)| Shortfall {
            name: name.clone(),
            value: (v * 100.0).round() as i32,
            target: (t * 100.0).round() as i32,
            gap: (((t - v) * 100.0).round() as i32).max(0),
        })
        .filter(|s| s.gap > 0)
        .collect::<Vec<_>>();
    shortfalls.sort_by(|a, b| b.gap.cmp(&a.gap));
    shortfalls.truncate(4);

    let signals = shortfalls
        .iter()
        .map(|s| format!("{} {} -> {} (gap {})", s.name, s.value, s.target, s.gap))
        .collect();

    let kind = if x >= 0.75 {
        "good completeness/no major gaps"
    } else if x >= 0.55 {
        "basically complete/isolated gaps"
    } else {
        "significant gaps/prioritize remediation"
    };

    let reliability = if vector.len() >= DERIVED_DIMS {
        Reliability::High
    } else {
        Reliability::Mid
    };

    IndexResult::new(
        to_percent(x),
        components(&[("cov_mean", cov_mean), ("worst", worst), ("spread", spread)]),
        kind,
        signals,
        reliability,
    )
}

fn dimension_name(cfg: &PerfectionThresholds, i: usize) -> String {
    cfg.baseline_dims
        .as_ref()
        .and_then(|names| names.get(i).cloned())
        .unwrap_or_else(|| format!("dimension #{}", i + 1))
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/perfection.rs"]
mod tests;
