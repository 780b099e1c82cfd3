//! Statistics primitives shared by every index calculator.
//!
//! All functions are total: empty slices and degenerate distributions
//! produce a defined value, never `NaN` or infinity.

pub const CV_EPS: f32 = 1e-6;

pub fn mean(xs: &[f32]) -> f32 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f32>() / xs.len() as f32
}

/// Population standard deviation (no Bessel correction).
pub fn stdev(xs: &[f32]) -> f32 {
    let m = mean(xs);
    mean(&xs.iter().map(|v| (v - m) * (v - m)).collect::<Vec<_>>()).sqrt()
}

/// Coefficient of variation with an epsilon-guarded denominator.
///
/// Returns 0 when the mean is exactly 0. That short-circuit bypasses the
/// epsilon guard for zero-centered data; it is the documented behavior of
/// this engine, not a bug.
pub fn coefficient_of_variation(xs: &[f32]) -> f32 {
    let m = mean(xs);
    if m == 0.0 {
        return 0.0;
    }
    stdev(xs) / (m.abs() + CV_EPS)
}

/// Lower-median of the absolute deviations from the mean. 0 when empty.
pub fn median_abs_deviation(xs: &[f32]) -> f32 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    let mut devs = xs.iter().map(|v| (v - m).abs()).collect::<Vec<_>>();
    devs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    devs[(devs.len() - 1) / 2]
}

pub fn clip01(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Shrinks the spread around the 0.5 midpoint by factor `k`.
pub fn compress_to_unit(x01: f32, k: f32) -> f32 {
    0.5 + (x01 - 0.5) * k
}

/// Clamps into `[lo, hi]` so that no index reports a literal 0 or 100.
pub fn soft_clamp01(x01: f32, lo: f32, hi: f32) -> f32 {
    x01.max(lo).min(hi)
}

pub fn to_percent(x01: f32) -> u32 {
    (clip01(x01) * 100.0).round() as u32
}

/// True when the vector carries no real signal: empty, or every component
/// within 1.5 of the neutral midpoint 50.
pub fn is_default_vector(v: &[f32]) -> bool {
    v.iter().all(|x| (x - 50.0).abs() <= 1.5)
}

/// Indices of the `k` largest (or smallest, if `ascending`) values.
/// Ties keep first-encountered order.
pub fn top_k_indices(xs: &[f32], k: usize, ascending: bool) -> Vec<usize> {
    let mut idx = (0..xs.len()).collect::<Vec<_>>();
    idx.sort_by(|&a, &b| {
        let ord = xs[a]
            .partial_cmp(&xs[b])
            .unwrap_or(std::cmp::Ordering::Equal);
        if ascending { ord } else { ord.reverse() }
    });
    idx.truncate(k);
    idx
}

/// Cosine similarity in [-1, 1]. Two near-zero vectors are treated as
/// identical (1.0); exactly one near-zero vector has no direction to
/// compare against (0.0).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na < CV_EPS && nb < CV_EPS {
        return 1.0;
    }
    if na < CV_EPS || nb < CV_EPS {
        return 0.0;
    }
    dot / (na * nb)
}

/// Cosine mapped into [0, 1] via `(cos + 1) / 2`.
pub fn cosine01(a: &[f32], b: &[f32]) -> f32 {
    clip01((cosine_similarity(a, b) + 1.0) / 2.0)
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
