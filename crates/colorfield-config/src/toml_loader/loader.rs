//! Core TOML config loading: read from path or platform default.
//!
//! Loading usually happens before logging is configured (the config picks
//! the log level), so the loader reports its outcome in [`LoadedConfig`]
//! instead of logging it.

use crate::schema::ColorFieldConfig;
use crate::validation;
use colorfield_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// How the returned config was obtained.
#[derive(Debug)]
pub enum LoadStatus {
    /// Parsed and validated from an existing file.
    Loaded,
    /// No file existed; the commented template was written.
    Created,
    /// The file parsed but failed validation, so defaults are in use.
    FellBack(ConfigError),
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ColorFieldConfig,
    pub path: PathBuf,
    pub status: LoadStatus,
}

impl LoadedConfig {
    /// The validation error that forced the defaults, if any.
    pub fn fallback_reason(&self) -> Option<&ConfigError> {
        match &self.status {
            LoadStatus::FellBack(e) => Some(e),
            _ => None,
        }
    }

    /// Report the outcome through `tracing`. Call after the subscriber is
    /// installed.
    pub fn log(&self) {
        match &self.status {
            LoadStatus::Loaded => info!("loaded config from {}", self.path.display()),
            LoadStatus::Created => {
                info!("no config found, created default at {}", self.path.display())
            }
            LoadStatus::FellBack(e) => {
                warn!("config validation warning in {}: {e}", self.path.display());
                warn!("falling back to default config");
            }
        }
    }
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. A config that fails validation is
/// replaced by the default config, with the error kept in the status.
pub fn load_from_path(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ColorFieldConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    let (config, status) = match validation::validate(&config) {
        Ok(()) => (config, LoadStatus::Loaded),
        Err(e) => (ColorFieldConfig::default(), LoadStatus::FellBack(e)),
    };

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        status,
    })
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/colorfield/config.toml`
/// On Linux: `~/.config/colorfield/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<LoadedConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(loaded) => Ok(loaded),
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(LoadedConfig {
                config: ColorFieldConfig::default(),
                path,
                status: LoadStatus::Created,
            })
        }
        Err(e) => Err(e),
    }
}
