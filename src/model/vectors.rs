pub const TRAIT_DIMS: usize = 5;
pub const DERIVED_DIMS: usize = 8;
pub const SPARSE_DIMS: usize = 16;

/// Big Five trait vector: openness, conscientiousness, extraversion,
/// agreeableness, neuroticism. Components are 0-100, 50 neutral.
pub type TraitVec = [f32; TRAIT_DIMS];

/// Derived 8-dimensional descriptor (structural or potential), 0-100.
pub type DerivedVec = [f32; DERIVED_DIMS];

/// Display-only 16-slot vector; even slots carry an 8-D vector.
pub type SparseVec = [f32; SPARSE_DIMS];

pub const NEUTRAL: f32 = 50.0;

pub fn neutral_trait() -> TraitVec {
    [NEUTRAL; TRAIT_DIMS]
}

pub fn neutral_derived() -> DerivedVec {
    [NEUTRAL; DERIVED_DIMS]
}

/// Exact all-midpoint check used for provenance decisions. Distinct from
/// `stats::is_default_vector`, which allows a 1.5 tolerance.
pub fn is_all_mid(v: &[f32]) -> bool {
    !v.is_empty() && v.iter().all(|x| *x == NEUTRAL)
}

/// An 8-D vector is usable only when it has exactly 8 entries and carries
/// signal beyond the no-answer default.
pub fn valid8(v: &[f32]) -> bool {
    v.len() == DERIVED_DIMS && !is_all_mid(v)
}

/// Normalize a 0-100 component into [-1, 1] around the neutral midpoint.
pub fn to_signed_unit(x: f32) -> f32 {
    (x - NEUTRAL) / NEUTRAL
}

pub fn to_unit(x: f32) -> f32 {
    crate::stats::clip01(x / 100.0)
}
