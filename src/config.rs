use crate::log_debug;
use crate::theme::ConvertOptions;

use dirs::config_dir;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name under the platform config directory
pub const APP_DIR: &str = "vsc-to-tm";

/// Configuration filename
pub const CONFIG_FILENAME: &str = "config.toml";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration structure for vsc-to-tm
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Extra workbench color -> default settings mappings, applied after the built-ins
    #[serde(default)]
    pub color_mappings: IndexMap<String, String>,
    /// Attach a freshly generated UUID to every converted theme
    #[serde(default)]
    pub include_uuid: bool,
    /// Whether to enable verbose logging (includes external crate logs)
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Config {
    /// Load the configuration from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log_debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log_debug!("Configuration loaded from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the path to the default configuration file
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
    }

    /// Build conversion options from this configuration
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            extra_mappings: self.color_mappings.clone(),
            ..ConvertOptions::default()
        }
    }
}
