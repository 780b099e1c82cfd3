use std::collections::BTreeMap;

use serde::Deserialize;

/// Immutable tuning profile for one computation. Calculators read it, never
/// mutate it. Missing fields in an override file keep the v1 defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difference: DifferenceWeights,
    pub kernel_stability: KernelStabilityWeights,
    pub self_integration: SelfIntegrationWeights,
    pub circularity: CircularityConfig,
    pub perfection: PerfectionThresholds,
    pub confidence: ConfidenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DifferenceWeights {
    /// Share of the L1 distance in the fallback blend; the cosine term
    /// takes the remainder.
    pub l1_weight: f32,
    pub compress_k: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KernelStabilityWeights {
    pub source_weight: f32,
    pub time_weight: f32,
    pub context_weight: f32,
    /// Cross-source stdev at which source consistency bottoms out.
    pub sigma0: f32,
    /// History MAD at which time consistency bottoms out.
    pub mad0: f32,
    pub compress_k: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelfIntegrationWeights {
    pub direction_weight: f32,
    pub magnitude_weight: f32,
    pub structural_weight: f32,
    /// RMSE at which magnitude agreement bottoms out.
    pub rmse0: f32,
    pub compress_k: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CircularityConfig {
    /// Balance sensitivity: coefficient of variation at which circularity
    /// bottoms out.
    pub kappa: f32,
    pub compress_k: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerfectionThresholds {
    /// Optional dimension names; absent names fall back to "dimension #N".
    pub baseline_dims: Option<Vec<String>>,
    /// Per-dimension coverage targets in [0, 1], keyed by dimension name.
    pub targets: BTreeMap<String, f32>,
    pub default_target: f32,
    pub mean_weight: f32,
    pub worst_weight: f32,
    pub spread_weight: f32,
    /// Spread CV at which the dispersion penalty bottoms out.
    pub cv0: f32,
    pub compress_k: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub drive_key: String,
    pub influence_key: String,
    pub disposition_weight: f32,
    pub evidence_weight: f32,
    pub consistency_weight: f32,
    pub compress_k: f32,
}

impl EngineConfig {
    pub fn default_v1() -> Self {
        Self {
            difference: DifferenceWeights {
                l1_weight: 0.5,
                compress_k: 0.7,
            },
            kernel_stability: KernelStabilityWeights {
                source_weight: 0.5,
                time_weight: 0.3,
                context_weight: 0.2,
                sigma0: 0.25,
                mad0: 0.15,
                compress_k: 0.75,
            },
            self_integration: SelfIntegrationWeights {
                direction_weight: 0.5,
                magnitude_weight: 0.3,
                structural_weight: 0.2,
                rmse0: 0.6,
                compress_k: 0.75,
            },
            circularity: CircularityConfig {
                kappa: 0.30,
                compress_k: 0.8,
            },
            perfection: PerfectionThresholds {
                baseline_dims: None,
                targets: BTreeMap::new(),
                default_target: 0.60,
                mean_weight: 0.6,
                worst_weight: 0.3,
                spread_weight: 0.1,
                cv0: 0.35,
                compress_k: 0.75,
            },
            confidence: ConfidenceConfig {
                drive_key: "drive".to_string(),
                influence_key: "influence".to_string(),
                disposition_weight: 0.5,
                evidence_weight: 0.3,
                consistency_weight: 0.2,
                compress_k: 0.8,
            },
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

macro_rules! section_default {
    ($ty:ident, $field:ident) => {
        impl Default for $ty {
            fn default() -> Self {
                EngineConfig::default_v1().$field
            }
        }
    };
}

section_default!(DifferenceWeights, difference);
section_default!(KernelStabilityWeights, kernel_stability);
section_default!(SelfIntegrationWeights, self_integration);
section_default!(CircularityConfig, circularity);
section_default!(PerfectionThresholds, perfection);
section_default!(ConfidenceConfig, confidence);
