//! Host configuration, read from a TOML file.  Every field has a default so
//! a partial (or missing) file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How the wall clock seeds sprite dimming.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NightMode {
    #[default]
    Auto,
    Day,
    Night,
}

impl NightMode {
    /// `hour` is the current hour of day, 0–23.
    pub fn resolve(self, hour: u32) -> bool {
        match self {
            NightMode::Auto => hour < 6 || hour > 18,
            NightMode::Day => false,
            NightMode::Night => true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Frames a key counts as held after its last press/repeat event, for
    /// terminals that never report releases.
    pub hold_window: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { hold_window: 8 }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Fixed RNG seed; random when absent.
    pub seed: Option<u64>,
    pub night_mode: NightMode,
    pub log: LogConfig,
    pub input: InputConfig,
}

impl HostConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }
}
