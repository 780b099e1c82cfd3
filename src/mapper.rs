//! Trait-space mapping: Big Five vectors into the two derived 8-D spaces,
//! plus the injectable capability bundle for the aggregator.

use tracing::warn;

use crate::model::vectors::{
    DERIVED_DIMS, DerivedVec, SPARSE_DIMS, SparseVec, TRAIT_DIMS, neutral_derived,
};

pub const STRUCTURAL_DIMENSIONS: [&str; DERIVED_DIMS] = [
    "leadership",
    "execution",
    "innovation",
    "collaboration",
    "learning",
    "resilience",
    "communication",
    "decisiveness",
];

pub const POTENTIAL_DIMENSIONS: [&str; DERIVED_DIMS] = [
    "strategic_thinking",
    "innovation_potential",
    "leadership_potential",
    "learning_potential",
    "adaptability",
    "collaboration_potential",
    "execution_potential",
    "growth_potential",
];

// Rows are derived dimensions, columns are O, C, E, A, N weights.
const TRAITS_TO_STRUCTURAL: [[f32; TRAIT_DIMS]; DERIVED_DIMS] = [
    [0.25, 0.15, 0.35, 0.10, -0.15], // leadership
    [0.10, 0.50, 0.20, 0.05, -0.20], // execution
    [0.45, 0.10, 0.25, 0.05, -0.10], // innovation
    [0.05, 0.15, 0.30, 0.45, -0.15], // collaboration
    [0.40, 0.25, 0.15, 0.10, -0.10], // learning
    [0.15, 0.30, 0.20, 0.10, -0.40], // resilience
    [0.10, 0.15, 0.45, 0.25, -0.15], // communication
    [0.20, 0.35, 0.25, 0.05, -0.20], // decisiveness
];

const TRAITS_TO_POTENTIAL: [[f32; TRAIT_DIMS]; DERIVED_DIMS] = [
    [0.35, 0.25, 0.20, 0.05, -0.15], // strategic_thinking
    [0.50, 0.10, 0.20, 0.05, -0.10], // innovation_potential
    [0.20, 0.20, 0.40, 0.15, -0.20], // leadership_potential
    [0.45, 0.20, 0.15, 0.15, -0.10], // learning_potential
    [0.30, 0.15, 0.25, 0.20, -0.25], // adaptability
    [0.10, 0.15, 0.25, 0.50, -0.15], // collaboration_potential
    [0.15, 0.45, 0.25, 0.10, -0.20], // execution_potential
    [0.35, 0.25, 0.25, 0.20, -0.20], // growth_potential
];

const STRUCTURAL_GAMMA: f32 = 1.05;
const POTENTIAL_GAMMA: f32 = 1.08;

/// Converts 5-D trait vectors into the derived 8-D spaces. Implementations
/// must tolerate malformed input by returning the neutral baseline.
pub trait TraitMapper {
    fn traits_to_structural(&self, traits: &[f32]) -> DerivedVec;
    fn traits_to_potential(&self, traits: &[f32]) -> DerivedVec;
}

/// Fixed-matrix mapper with a mild midpoint-anchored power curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMapper;

impl TraitMapper for BuiltinMapper {
    fn traits_to_structural(&self, traits: &[f32]) -> DerivedVec {
        map_traits(traits, &TRAITS_TO_STRUCTURAL, STRUCTURAL_GAMMA, "structural")
    }

    fn traits_to_potential(&self, traits: &[f32]) -> DerivedVec {
        map_traits(traits, &TRAITS_TO_POTENTIAL, POTENTIAL_GAMMA, "potential")
    }
}

fn map_traits(
    traits: &[f32],
    matrix: &[[f32; TRAIT_DIMS]; DERIVED_DIMS],
    gamma: f32,
    space: &str,
) -> DerivedVec {
    if traits.len() != TRAIT_DIMS {
        warn!(
            space,
            arity = traits.len(),
            "malformed trait vector; returning neutral baseline"
        );
        return neutral_derived();
    }

    let mut out = neutral_derived();
    for (i, row) in matrix.iter().enumerate() {
        let mut score = 50.0;
        for (j, w) in row.iter().enumerate() {
            score += (traits[j] - 50.0) * w;
        }
        out[i] = (apply_curve(score.clamp(0.0, 100.0) / 100.0, gamma) * 100.0).round();
    }
    out
}

/// Mild S-shaped nonlinearity anchored at 0, 0.5 and 1, so the neutral
/// baseline maps onto itself exactly.
fn apply_curve(x01: f32, gamma: f32) -> f32 {
    if x01 <= 0.5 {
        0.5 * (2.0 * x01).powf(gamma)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - x01)).powf(gamma)
    }
}

/// Expands an 8-D vector into the 16-slot display layout: even slots carry
/// the values, odd slots stay zero.
pub fn to_sparse16(v: &[f32]) -> SparseVec {
    let mut out = [0.0; SPARSE_DIMS];
    if v.len() != DERIVED_DIMS {
        return out;
    }
    for (i, x) in v.iter().enumerate() {
        out[i * 2] = *x;
    }
    out
}

#[derive(Debug, Clone)]
pub struct MaskingInputs<'a> {
    pub ecology16: &'a [f32],
    pub structural_self: &'a [f32],
    pub structural_env: &'a [f32],
    pub entropy: f32,
}

/// Aggregate masking assessment returned by an external model.
/// `masking_score` is already on the 0-100 scale.
#[derive(Debug, Clone)]
pub struct MaskingOutcome {
    pub masking_score: f32,
    pub alignment_gap: f32,
    pub intentionality: f32,
    pub cost: f32,
    pub label: String,
    pub signals: Vec<String>,
}

/// Optional capability backing the difference index's primary path.
/// Absence is not an error; the documented fallback runs instead.
pub trait MaskingModel {
    fn compute(&self, inputs: &MaskingInputs<'_>) -> MaskingOutcome;
}

/// Capability bundle handed to the aggregator. Every slot has a built-in
/// default, so the engine is testable with mock collaborators.
pub struct Capabilities {
    pub mapper: Box<dyn TraitMapper>,
    pub masking: Option<Box<dyn MaskingModel>>,
    /// Name table for evidence lookup in the potential vector. When absent,
    /// lookups resolve to the first two slots.
    pub potential_names: Option<Vec<String>>,
}

impl Capabilities {
    pub fn builtin() -> Self {
        Self {
            mapper: Box::new(BuiltinMapper),
            masking: None,
            potential_names: None,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/mapper.rs"]
mod tests;
