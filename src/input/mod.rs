//! Assessment payload loading. Field names accept both the descriptive
//! spelling and the compact wire aliases used by assessment front-ends.

pub mod normalize;

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Raw, untrusted payload. Every field is optional; shape problems are
/// resolved by the normalization pass, never reported as errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPayload {
    #[serde(alias = "bf_self")]
    pub trait_self: Option<Vec<f32>>,
    #[serde(alias = "bf_env")]
    pub trait_env: Option<Vec<f32>>,
    #[serde(alias = "bf_s2")]
    pub trait_alt2: Option<Vec<f32>>,
    #[serde(alias = "bf_s3")]
    pub trait_alt3: Option<Vec<f32>>,
    #[serde(alias = "bf_s4")]
    pub trait_alt4: Option<Vec<f32>>,
    #[serde(alias = "struct_self8")]
    pub structural_self: Option<Vec<f32>>,
    #[serde(alias = "struct_env8", alias = "struct8")]
    pub structural_env: Option<Vec<f32>>,
    #[serde(alias = "pot8", alias = "pot_env8")]
    pub potential: Option<Vec<f32>>,
    #[serde(alias = "eco16")]
    pub ecology: Option<Vec<f32>>,
    pub entropy_hint: Option<f32>,
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    #[serde(alias = "bf_env")]
    pub trait_env: Option<Vec<f32>>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid payload json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_payload(path: &Path) -> Result<RawPayload, InputError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn load_config(path: &Path) -> Result<crate::model::config::EngineConfig, InputError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
