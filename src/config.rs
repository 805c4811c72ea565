//! Planner configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [planner]
//! default_section_minutes = 30
//! resolution = "dependency"   # or "extract"
//! ```
//!
//! Lookup order: an explicit path, `./sectionplan.toml`, then
//! `<config dir>/sectionplan/config.toml`, falling back to defaults.
//! `SECTIONPLAN_DEFAULT_MINUTES` and `SECTIONPLAN_RESOLUTION` override
//! whatever was loaded.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::plan::ownership::ResolutionPreference;

pub const LOCAL_CONFIG_FILE: &str = "sectionplan.toml";
pub const ENV_DEFAULT_MINUTES: &str = "SECTIONPLAN_DEFAULT_MINUTES";
pub const ENV_RESOLUTION: &str = "SECTIONPLAN_RESOLUTION";

const DEFAULT_SECTION_MINUTES: u32 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Duration assumed for sections without an estimate
    #[serde(default = "default_section_minutes")]
    pub default_section_minutes: u32,
    /// Resolution suggested for two-way ownership conflicts
    #[serde(default)]
    pub resolution: ResolutionPreference,
}

fn default_section_minutes() -> u32 {
    DEFAULT_SECTION_MINUTES
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_section_minutes: DEFAULT_SECTION_MINUTES,
            resolution: ResolutionPreference::default(),
        }
    }
}

impl Config {
    /// Resolve, load and apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// First existing config file in lookup order
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("sectionplan").join("config.toml"))
            .filter(|path| path.is_file())
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(ENV_DEFAULT_MINUTES) {
            self.planner.default_section_minutes = value
                .trim()
                .parse()
                .with_context(|| {
                    format!("{ENV_DEFAULT_MINUTES} must be a whole number of minutes, got '{value}'")
                })?;
        }
        if let Ok(value) = std::env::var(ENV_RESOLUTION) {
            self.planner.resolution = value
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {ENV_RESOLUTION}"))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.planner.default_section_minutes == 0 {
            bail!("default_section_minutes must be greater than zero");
        }
        Ok(())
    }
}
