//! Difference index: divergence between self-reported and externally
//! perceived presentation. A masking capability, when injected, provides
//! the primary assessment; otherwise a geometric trait-space fallback runs.

use crate::input::normalize::NormalizedPayload;
use crate::mapper::{MaskingInputs, MaskingModel};
use crate::model::config::DifferenceWeights;
use crate::model::result::{IndexResult, Reliability, components};
use crate::model::vectors::to_signed_unit;
use crate::stats::{
    compress_to_unit, cosine01, is_default_vector, mean, soft_clamp01, to_percent,
};

pub fn compute_difference(
    payload: &NormalizedPayload,
    masking: Option<&dyn MaskingModel>,
    cfg: &DifferenceWeights,
) -> IndexResult {
    if let Some(model) = masking {
        return from_masking(payload, model);
    }
    fallback(payload, cfg)
}

fn from_masking(payload: &NormalizedPayload, model: &dyn MaskingModel) -> IndexResult {
    let outcome = model.compute(&MaskingInputs {
        ecology16: &payload.ecology,
        structural_self: &payload.structural_self,
        structural_env: &payload.structural_env,
        entropy: payload.entropy_hint,
    });
    let reliability = if is_default_vector(&payload.structural_env)
        || is_default_vector(&payload.structural_self)
    {
        Reliability::Low
    } else {
        Reliability::High
    };
    IndexResult::new(
        to_percent(outcome.masking_score / 100.0),
        components(&[
            ("align_gap", outcome.alignment_gap),
            ("intentionality", outcome.intentionality),
            ("cost", outcome.cost),
        ]),
        &outcome.label,
        outcome.signals,
        reliability,
    )
}

fn fallback(payload: &NormalizedPayload, cfg: &DifferenceWeights) -> IndexResult {
    let s = payload.trait_self.map(to_signed_unit);
    let e = payload.trait_env.map(to_signed_unit);

    let l1 = mean(
        &s.iter()
            .zip(&e)
            .map(|(a, b)| (a - b).abs())
            .collect::<Vec<_>>(),
    );
    let cos = cosine01(&s, &e);

    let mut raw = cfg.l1_weight * l1 + (1.0 - cfg.l1_weight) * (1.0 - cos);
    raw = compress_to_unit(raw, cfg.compress_k);
    raw = soft_clamp01(raw, 0.05, 0.95);

    let kind = if raw < 0.25 {
        "mild difference/normal presentation"
    } else if raw < 0.55 {
        "moderate difference/selective presentation"
    } else {
        "significant difference/strategic presentation"
    };

    let reliability =
        if is_default_vector(&payload.trait_env) || is_default_vector(&payload.trait_self) {
            Reliability::Low
        } else {
            Reliability::Mid
        };

    IndexResult::new(
        to_percent(raw),
        components(&[
            ("l1", to_percent(l1) as f32),
            ("one_minus_cos", to_percent(1.0 - cos) as f32),
        ]),
        kind,
        Vec::new(),
        reliability,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/difference.rs"]
mod tests;
