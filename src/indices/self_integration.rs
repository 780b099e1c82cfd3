//! Self-integration index: how congruent the self-reported and
//! environment-perceived presentations are, in direction, magnitude and
//! 8-D structural shape.

use crate::input::normalize::NormalizedPayload;
use crate::model::config::SelfIntegrationWeights;
use crate::model::result::{IndexResult, Reliability, components};
use crate::model::vectors::to_signed_unit;
use crate::stats::{
    clip01, compress_to_unit, cosine01, is_default_vector, mean, soft_clamp01, to_percent,
};

pub fn compute_self_integration(
    payload: &NormalizedPayload,
    cfg: &SelfIntegrationWeights,
) -> IndexResult {
    let s = payload.trait_self.map(to_signed_unit);
    let e = payload.trait_env.map(to_signed_unit);

    let direction = cosine01(&s, &e);

    let rmse = mean(
        &s.iter()
            .zip(&e)
            .map(|(a, b)| (a - b) * (a - b))
            .collect::<Vec<_>>(),
    )
    .sqrt();
    let magnitude = 1.0 - (rmse / cfg.rmse0).min(1.0);

    let ss = payload.structural_self.map(to_signed_unit);
    let se = payload.structural_env.map(to_signed_unit);
    let structural = cosine01(&ss, &se);

    let mut x = clip01(
        cfg.direction_weight * direction
            + cfg.magnitude_weight * magnitude
            + cfg.structural_weight * structural,
    );
    x = compress_to_unit(x, cfg.compress_k);
    x = soft_clamp01(x, 0.07, 0.97);

    let kind = if x >= 0.75 {
        "highly congruent/unified presentation"
    } else if x >= 0.55 {
        "partially congruent/mild deviation"
    } else {
        "insufficient congruence/internal split"
    };

    let reliability = if is_default_vector(&payload.trait_env)
        || is_default_vector(&payload.structural_env)
    {
        Reliability::Low
    } else {
        Reliability::High
    };

    IndexResult::new(
        to_percent(x),
        components(&[
            ("dir_alignment", to_percent(direction) as f32),
            ("mag_alignment", to_percent(magnitude) as f32),
            ("struct_alignment", to_percent(structural) as f32),
        ]),
        kind,
        Vec::new(),
        reliability,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/self_integration.rs"]
mod tests;
