//! Configuration file support for cyclelog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/cyclelog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub cycle: CycleConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Training cycle configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Length of the training block in weeks
    #[serde(default = "default_cycle_weeks")]
    pub weeks: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            weeks: default_cycle_weeks(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("cyclelog")
}

fn default_cycle_weeks() -> u32 {
    6
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Standard config file location
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cyclelog")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.cycle.weeks == 0 {
            return Err(Error::Config("cycle.weeks must be at least 1".into()));
        }
        Ok(())
    }
}
