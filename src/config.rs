//! Deployment configuration, loadable from a TOML file.
//!
//! Every field is optional in the file and falls back to the defaults in
//! [`crate::constants`], so an empty file (or no file at all) yields the
//! shipped behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    GEYSER_SCAN_RANGE, REFUND_GRACE_TICKS, SEARCH_RADIUS_CAP, SEARCH_RADIUS_STEP,
    SEARCH_START_RADIUS, UNIT_COLLISION_MARGIN,
};
use crate::world::{StructureType, Tick};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level agent configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub placement: PlacementConfig,
    pub build: BuildConfig,
}

impl AgentConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Knobs for the expanding-ring site search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub start_radius: i32,
    pub radius_step: i32,
    pub radius_cap: i32,
    pub collision_margin: i32,
    pub geyser_scan_range: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            start_radius: SEARCH_START_RADIUS,
            radius_step: SEARCH_RADIUS_STEP,
            radius_cap: SEARCH_RADIUS_CAP,
            collision_margin: UNIT_COLLISION_MARGIN,
            geyser_scan_range: GEYSER_SCAN_RANGE,
        }
    }
}

/// Knobs for build dispatch and commitment reconciliation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Engine id of the faction's supply structure. The shipped default is
    /// a placeholder; deployments set this from engine data at startup.
    pub supply_structure: StructureType,
    pub refund_grace_ticks: Tick,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            supply_structure: StructureType(0),
            refund_grace_ticks: REFUND_GRACE_TICKS,
        }
    }
}
