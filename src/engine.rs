//! Aggregator: normalizes the payload, runs every calculator, applies the
//! provenance-based reliability overrides and assembles the report.
//!
//! This entry point is total: malformed payloads degrade, they never error.

use chrono::Utc;

use crate::indices::circularity::compute_circularity;
use crate::indices::confidence::compute_confidence;
use crate::indices::difference::compute_difference;
use crate::indices::kernel_stability::compute_kernel_stability;
use crate::indices::perfection::compute_perfection;
use crate::indices::self_integration::compute_self_integration;
use crate::input::RawPayload;
use crate::input::normalize::normalize;
use crate::mapper::Capabilities;
use crate::model::config::EngineConfig;
use crate::model::result::{CompositeReport, IndexResult, Reliability, ReliabilitySummary};

pub fn compute_all_indices(
    payload: &RawPayload,
    config: &EngineConfig,
    caps: &Capabilities,
) -> CompositeReport {
    let p = normalize(payload, caps.mapper.as_ref());

    let mut difference = compute_difference(&p, caps.masking.as_deref(), &config.difference);
    let mut kernel_stability = compute_kernel_stability(&p, &config.kernel_stability);
    let mut self_integration = compute_self_integration(&p, &config.self_integration);

    let circularity_structural = if p.structural_env_valid {
        compute_circularity(&p.structural_env, &config.circularity)
    } else {
        IndexResult::degraded("struct8")
    };
    let circularity_potential = if p.potential_valid {
        compute_circularity(&p.potential, &config.circularity)
    } else {
        IndexResult::degraded("pot8")
    };
    let completeness = if p.structural_env_valid {
        compute_perfection(&p.structural_env, &config.perfection)
    } else {
        IndexResult::degraded("struct8")
    };

    let mut confidence = compute_confidence(
        &p,
        self_integration.value as f32 / 100.0,
        caps.potential_names.as_deref(),
        &config.confidence,
    );

    // Provenance overrides trump whatever the calculators inferred from
    // vector shape alone.
    let both_genuine = p.self_genuine && p.env_genuine;
    let any_genuine = p.self_genuine || p.env_genuine;
    difference.reliability = gate(both_genuine);
    self_integration.reliability = gate(both_genuine);
    kernel_stability.reliability = gate(any_genuine);
    confidence.reliability = gate(any_genuine);

    let reliability = ReliabilitySummary {
        difference: difference.reliability,
        kernel_stability: kernel_stability.reliability,
        self_integration: self_integration.reliability,
        circularity_structural: circularity_structural.reliability,
        circularity_potential: circularity_potential.reliability,
        completeness: completeness.reliability,
        confidence: confidence.reliability,
    };

    CompositeReport {
        difference,
        kernel_stability,
        self_integration,
        circularity_structural,
        circularity_potential,
        completeness,
        confidence,
        reliability,
        computed_at: Utc::now().to_rfc3339(),
    }
}

fn gate(genuine: bool) -> Reliability {
    if genuine {
        Reliability::High
    } else {
        Reliability::Low
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine.rs"]
mod tests;
