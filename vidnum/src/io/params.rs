use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const SEED: u64 = 42;
pub const KAPPA: f64 = 0.30;
pub const N_TRUNC: u32 = 50;
pub const EPS_INF: f64 = 1e-10;

/// Global numerical parameters published alongside the Delta20 arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBlock {
    pub lattice: String,
    pub operator: String,
    pub pseudoinverse: String,
    pub coherence_coupling_kappa: f64,
    #[serde(rename = "truncation_depth_N")]
    pub truncation_depth_n: u32,
    pub epsilon_infinity: f64,
    pub random_seed: u64,
    pub smoothing: String,
    pub normalization: String,
    pub units: BTreeMap<String, String>,
}

impl Default for ParameterBlock {
    fn default() -> Self {
        let units = [
            ("Delta", "dimensionless graph Laplacian"),
            ("Delta_pinv", "dimensionless propagator"),
            ("path_length", "graph-edge units"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            lattice: "DLSFH (20-vertex dodecahedral graph)".to_string(),
            operator: "Delta20 (graph Laplacian)".to_string(),
            pseudoinverse: "Delta20_pinv (Moore-Penrose)".to_string(),
            coherence_coupling_kappa: KAPPA,
            truncation_depth_n: N_TRUNC,
            epsilon_infinity: EPS_INF,
            random_seed: SEED,
            smoothing: "none".to_string(),
            normalization: "SGCV coherence normalization".to_string(),
            units,
        }
    }
}

impl ParameterBlock {
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize parameter block failed")
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir failed (path={:?})", parent))?;
        }
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json)
            .with_context(|| format!("write parameter block failed (path={:?})", path))
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open parameter file: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse parameter file: {:?}", path))
    }
}
