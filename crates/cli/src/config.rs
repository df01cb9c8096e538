//! Optional YAML configuration for the `railcloud` binary.
//!
//! Command-line flags take precedence over values loaded here.

use std::path::Path;

use anyhow::{Context, Result};
use railcloud_io::{LasHeader, RawBounds, ALL_POINTS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadConfig {
    /// Maximum number of records to scan per file
    #[serde(default = "default_max_points")]
    pub max_points: u64,

    /// Raw-coordinate box applied when reading
    #[serde(default)]
    pub bounds: Option<RawBounds>,
}

fn default_max_points() -> u64 {
    ALL_POINTS
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            bounds: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Header template for written files; the input file's header if unset
    #[serde(default)]
    pub header: Option<LasHeader>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub read: ReadConfig,

    #[serde(default)]
    pub write: WriteConfig,
}

impl CliConfig {
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}
