//! Confidence index: trait disposition, behavioral evidence from the
//! potential vector, and the self-integration score as a consistency term.

use crate::input::normalize::NormalizedPayload;
use crate::model::config::ConfidenceConfig;
use crate::model::result::{ConfidenceBreakdown, IndexResult, Reliability, components};
use crate::model::vectors::to_unit;
use crate::stats::{clip01, compress_to_unit, soft_clamp01, to_percent};

// Inner mixes are part of the index definition, not tuning knobs.
const DISPOSITION_E: f32 = 0.45;
const DISPOSITION_N: f32 = 0.35;
const DISPOSITION_C: f32 = 0.20;
const EVIDENCE_DRIVE: f32 = 0.6;
const EVIDENCE_INFLUENCE: f32 = 0.4;

pub fn compute_confidence(
    payload: &NormalizedPayload,
    self_integration01: f32,
    potential_names: Option<&[String]>,
    cfg: &ConfidenceConfig,
) -> IndexResult {
    let extraversion = to_unit(payload.trait_self[2]);
    let neuroticism = to_unit(payload.trait_self[4]);
    let conscientiousness = to_unit(payload.trait_self[1]);
    let disposition = clip01(
        DISPOSITION_E * extraversion
            + DISPOSITION_N * (1.0 - neuroticism)
            + DISPOSITION_C * conscientiousness,
    );

    let drive_idx = lookup(potential_names, &cfg.drive_key).unwrap_or(0);
    let influence_idx = lookup(potential_names, &cfg.influence_key).unwrap_or(1);
    let drive = to_unit(payload.potential[drive_idx.min(payload.potential.len() - 1)]);
    let influence = to_unit(payload.potential[influence_idx.min(payload.potential.len() - 1)]);
    let evidence = clip01(EVIDENCE_DRIVE * drive + EVIDENCE_INFLUENCE * influence);

    // A missing or non-finite integration score contributes a neutral 0.5,
    // never NaN.
    let consistency = if self_integration01.is_finite() {
        clip01(self_integration01)
    } else {
        0.5
    };

    let mut x = clip01(
        cfg.disposition_weight * disposition
            + cfg.evidence_weight * evidence
            + cfg.consistency_weight * consistency,
    );
    x = compress_to_unit(x, cfg.compress_k);
    x = soft_clamp01(x, 0.06, 0.97);

    let kind = if x >= 0.75 {
        "high confidence/stable output"
    } else if x >= 0.55 {
        "moderate confidence/context-dependent"
    } else {
        "low confidence/needs structural support"
    };

    let mut result = IndexResult::new(
        to_percent(x),
        components(&[
            ("disposition", to_percent(disposition) as f32),
            ("evidence", to_percent(evidence) as f32),
            ("consistency", to_percent(consistency) as f32),
        ]),
        kind,
        Vec::new(),
        Reliability::High,
    );
    result.details = Some(ConfidenceBreakdown::fixed_v1());
    result
}

fn lookup(names: Option<&[String]>, key: &str) -> Option<usize> {
    names?.iter().position(|n| n == key)
}

#[cfg(test)]
#[path = "../../tests/src_inline/indices/confidence.rs"]
mod tests;
