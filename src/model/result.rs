use std::collections::BTreeMap;

use serde::Serialize;

/// Confidence-in-input marker, not a statistical confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    Low,
    Mid,
    High,
}

/// Uniform record produced by every index calculator.
#[derive(Debug, Clone, Serialize)]
pub struct IndexResult {
    /// Integer percentage, always within [0, 100].
    pub value: u32,
    pub components: BTreeMap<String, f32>,
    #[serde(rename = "type")]
    pub kind: String,
    pub signals: Vec<String>,
    pub reliability: Reliability,
    /// Name of the vector a degraded result was waiting for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needed: Option<String>,
    /// Fixed display-only weight breakdown (confidence index only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ConfidenceBreakdown>,
}

impl IndexResult {
    pub fn new(
        value: u32,
        components: BTreeMap<String, f32>,
        kind: &str,
        signals: Vec<String>,
        reliability: Reliability,
    ) -> Self {
        Self {
            value,
            components,
            kind: kind.to_string(),
            signals,
            reliability,
            needed: None,
            details: None,
        }
    }

    /// Substitute emitted when a calculator's required vector is missing.
    pub fn degraded(needed: &str) -> Self {
        Self {
            value: 0,
            components: BTreeMap::new(),
            kind: "unavailable".to_string(),
            signals: Vec::new(),
            reliability: Reliability::Low,
            needed: Some(needed.to_string()),
            details: None,
        }
    }
}

/// Display-only ratios describing the three confidence contributions.
/// These are fixed metadata, not a computed quantity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceBreakdown {
    pub personality_ratio: u32,
    pub evidence_ratio: u32,
    pub consistency_ratio: u32,
}

impl ConfidenceBreakdown {
    pub fn fixed_v1() -> Self {
        Self {
            personality_ratio: 50,
            evidence_ratio: 30,
            consistency_ratio: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReliabilitySummary {
    pub difference: Reliability,
    pub kernel_stability: Reliability,
    pub self_integration: Reliability,
    pub circularity_structural: Reliability,
    pub circularity_potential: Reliability,
    pub completeness: Reliability,
    pub confidence: Reliability,
}

/// Final report: one result per index, a reliability mirror, and the
/// computation timestamp. Immutable once returned.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeReport {
    pub difference: IndexResult,
    pub kernel_stability: IndexResult,
    pub self_integration: IndexResult,
    pub circularity_structural: IndexResult,
    pub circularity_potential: IndexResult,
    /// Published name for the perfection result.
    pub completeness: IndexResult,
    pub confidence: IndexResult,
    pub reliability: ReliabilitySummary,
    /// ISO-8601, UTC.
    pub computed_at: String,
}

pub fn components(pairs: &[(&str, f32)]) -> BTreeMap<String, f32> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}
