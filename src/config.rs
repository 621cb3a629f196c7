use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use glance_stats::StatsConfig;

/// Top-level TOML configuration. Only the `[stats]` table exists today;
/// everything falls back to defaults so running without a config file is
/// the common case.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlanceConfig {
    pub stats: StatsConfig,
}

impl GlanceConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
