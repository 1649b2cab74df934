use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Switches controlling which half of the Z-score a scaler applies.
///
/// Statistics are always learned in full; the switches only decide whether
/// `transform` subtracts the mean and divides by the spread.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ScalerConfig {
    pub with_mean: bool,
    pub with_std: bool,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

impl ScalerConfig {
    pub fn new(with_mean: bool, with_std: bool) -> Self {
        Self {
            with_mean,
            with_std,
        }
    }
}

/// Load a scaler configuration from a JSON file. Missing keys keep their defaults.
pub fn load_scaler_config<P: AsRef<Path>>(path: P) -> Result<ScalerConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ScalerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded scaler config from {}: {:?}",
        path.as_ref().display(),
        config
    );
    Ok(config)
}
