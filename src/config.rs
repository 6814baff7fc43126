//! Planner configuration.
//!
//! Every field has a default so a zero-config `PlannerConfig::default()` is a
//! working setup; a TOML file can override any subset of fields.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Tuning knobs for the search and simulation loops.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Step size of the visibility search, seconds.
    pub search_step_seconds: f64,
    /// Maximum number of visibility search steps before giving up.
    pub max_search_steps: usize,
    /// Maximum number of shot-count simulation steps before giving up.
    pub max_simulation_steps: usize,
    /// Minimum altitude used when a request does not supply one, degrees.
    pub default_min_altitude_deg: f64,
    /// Sun altitude defining astronomical twilight, degrees.
    pub twilight_sun_altitude_deg: f64,
    /// Drift rates below this magnitude are treated as a stationary axis,
    /// degrees per minute.
    pub drift_epsilon_deg_per_min: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            search_step_seconds: 60.0,
            max_search_steps: 24 * 60,
            max_simulation_steps: 24 * 60,
            default_min_altitude_deg: 5.0,
            twilight_sun_altitude_deg: -18.0,
            drift_epsilon_deg_per_min: 1e-9,
        }
    }
}

impl PlannerConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse planner configuration")
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
