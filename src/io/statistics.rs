//! JSON persistence for fitted scaler statistics.
use std::path::Path;

use anyhow::{Context, Result};

use crate::preprocessing::FittedStatistics;

pub fn save_statistics<P: AsRef<Path>>(path: P, statistics: &FittedStatistics) -> Result<()> {
    let json = serde_json::to_string_pretty(statistics).context("Failed to serialize statistics")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write statistics: {}", path.as_ref().display()))?;
    log::info!(
        "Saved statistics for {} features to {}",
        statistics.n_features(),
        path.as_ref().display()
    );
    Ok(())
}

/// Load statistics written by [`save_statistics`], rejecting inconsistent files.
pub fn load_statistics<P: AsRef<Path>>(path: P) -> Result<FittedStatistics> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read statistics: {}", path.as_ref().display()))?;
    let statistics: FittedStatistics = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse statistics: {}", path.as_ref().display()))?;
    statistics
        .validate()
        .with_context(|| format!("Inconsistent statistics in {}", path.as_ref().display()))?;
    Ok(statistics)
}
