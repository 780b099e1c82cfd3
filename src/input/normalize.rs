//! Single normalization pass at the aggregator boundary. Produces a fully
//! defaulted internal payload plus provenance flags, so the calculators
//! never see a missing or malformed field.

use crate::input::RawPayload;
use crate::mapper::{TraitMapper, to_sparse16};
use crate::model::vectors::{
    DERIVED_DIMS, DerivedVec, NEUTRAL, SPARSE_DIMS, SparseVec, TRAIT_DIMS, TraitVec, is_all_mid,
    neutral_derived, neutral_trait, valid8,
};

pub const MAX_HISTORY: usize = 5;

/// Payload after defaulting, sanitization and derived-vector fallback.
#[derive(Debug, Clone)]
pub struct NormalizedPayload {
    pub trait_self: TraitVec,
    pub trait_env: TraitVec,
    /// Provided, non-empty and not uniformly 50.
    pub self_genuine: bool,
    pub env_genuine: bool,
    /// Self vector plus every alternate source that arrived as a proper
    /// 5-D vector; consumed by the kernel-stability calculator.
    pub sources: Vec<TraitVec>,
    pub structural_self: DerivedVec,
    pub structural_env: DerivedVec,
    /// False when the vector was neither supplied nor derivable; dependent
    /// calculators degrade instead of running.
    pub structural_env_valid: bool,
    pub potential: DerivedVec,
    pub potential_valid: bool,
    pub ecology: SparseVec,
    pub entropy_hint: f32,
    /// Environment trait vectors of the most recent history entries,
    /// oldest first, capped at [`MAX_HISTORY`].
    pub history: Vec<TraitVec>,
}

pub fn normalize(raw: &RawPayload, mapper: &dyn TraitMapper) -> NormalizedPayload {
    let (trait_self, self_provided, self_genuine) = fill_trait(raw.trait_self.as_deref());
    let (trait_env, env_provided, env_genuine) = fill_trait(raw.trait_env.as_deref());

    let mut sources = vec![trait_self];
    for alt in [
        raw.trait_alt2.as_deref(),
        raw.trait_alt3.as_deref(),
        raw.trait_alt4.as_deref(),
    ]
    .into_iter()
    .flatten()
    {
        if alt.len() == TRAIT_DIMS {
            let mut v = neutral_trait();
            for (slot, x) in v.iter_mut().zip(alt) {
                *slot = sanitize(*x);
            }
            sources.push(v);
        }
    }

    // Derivation prefers the environment vector over self-report.
    let trait_for_map: Option<&TraitVec> = if env_provided {
        Some(&trait_env)
    } else if self_provided {
        Some(&trait_self)
    } else {
        None
    };

    let structural_env = resolve_derived(raw.structural_env.as_deref(), trait_for_map, |t| {
        mapper.traits_to_structural(t)
    });
    let potential = resolve_derived(raw.potential.as_deref(), trait_for_map, |t| {
        mapper.traits_to_potential(t)
    });

    let structural_self = match raw.structural_self.as_deref() {
        Some(v) if v.len() >= DERIVED_DIMS => {
            let mut out = neutral_derived();
            for (slot, x) in out.iter_mut().zip(v) {
                *slot = sanitize(*x);
            }
            out
        }
        _ => neutral_derived(),
    };

    let structural_env_valid = valid8(&structural_env);
    let potential_valid = valid8(&potential);

    // The 16-anchor ecology vector shares the sparse display layout; when
    // absent it is reconstructed from the structural vector.
    let mut ecology = [0.0; SPARSE_DIMS];
    match raw.ecology.as_deref() {
        Some(eco) if !eco.is_empty() => {
            for (slot, x) in ecology.iter_mut().zip(eco) {
                *slot = if x.is_finite() { *x } else { 0.0 };
            }
        }
        _ => {
            if structural_env_valid {
                ecology = to_sparse16(&structural_env);
            }
        }
    }

    let entropy_hint = raw
        .entropy_hint
        .filter(|e| e.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);

    let history = raw
        .history
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .rev()
        .take(MAX_HISTORY)
        .rev()
        .map(|entry| fill_trait(entry.trait_env.as_deref()).0)
        .collect();

    NormalizedPayload {
        trait_self,
        trait_env,
        self_genuine,
        env_genuine,
        sources,
        structural_self,
        structural_env,
        structural_env_valid,
        potential,
        potential_valid,
        ecology,
        entropy_hint,
        history,
    }
}

fn sanitize(x: f32) -> f32 {
    if x.is_finite() { x } else { NEUTRAL }
}

/// Pads or truncates to 5-D, defaulting absent components to the neutral
/// midpoint. Returns (vector, was provided non-empty, carries signal).
fn fill_trait(v: Option<&[f32]>) -> (TraitVec, bool, bool) {
    let mut out = neutral_trait();
    let Some(v) = v else {
        return (out, false, false);
    };
    if v.is_empty() {
        return (out, false, false);
    }
    for (slot, x) in out.iter_mut().zip(v) {
        *slot = sanitize(*x);
    }
    (out, true, !is_all_mid(&out))
}

/// Supplied vector if usable, else derived from a trait vector, else the
/// neutral baseline (which downstream validity checks will reject).
fn resolve_derived(
    supplied: Option<&[f32]>,
    trait_for_map: Option<&TraitVec>,
    derive: impl Fn(&[f32]) -> DerivedVec,
) -> DerivedVec {
    if let Some(v) = supplied {
        let sanitized = v.iter().map(|x| sanitize(*x)).collect::<Vec<_>>();
        if valid8(&sanitized) {
            let mut out = neutral_derived();
            out.copy_from_slice(&sanitized);
            return out;
        }
    }
    match trait_for_map {
        Some(t) => derive(t),
        None => neutral_derived(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/normalize.rs"]
mod tests;
