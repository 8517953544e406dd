use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DISK_RADIUS, MAX_DISK_RADIUS};
use crate::error::{NucleusError, Result};

/// Parameters of the nucleus label selector.
///
/// `Default` reproduces the fixed behavior: a disk of radius 20 for the opening.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Radius in pixels of the disk used to open the selected region.
    #[serde(default = "default_disk_radius")]
    pub disk_radius: usize,
}

fn default_disk_radius() -> usize {
    DEFAULT_DISK_RADIUS
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            disk_radius: DEFAULT_DISK_RADIUS,
        }
    }
}

impl SelectorConfig {
    /// Reject parameters the selector cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.disk_radius > MAX_DISK_RADIUS {
            return Err(NucleusError::InvalidConfig(format!(
                "disk_radius {} exceeds maximum {MAX_DISK_RADIUS}",
                self.disk_radius
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| NucleusError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NucleusError::InvalidConfig(e.to_string()))
    }
}
