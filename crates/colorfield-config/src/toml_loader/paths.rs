//! Config path resolution and default file creation.

use colorfield_common::ConfigError;
use std::path::{Path, PathBuf};

use super::template::default_config_toml;
use crate::toml_writer::write_atomically;

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("colorfield").join("config.toml"))
}

/// Write the commented default template to `path`, replacing any file there.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomically(path, &default_config_toml())
}
