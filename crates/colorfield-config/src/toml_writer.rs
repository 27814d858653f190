//! Persist a ColorFieldConfig as TOML.

use std::path::Path;

use colorfield_common::ConfigError;

use crate::schema::{ColorFieldConfig, CONFIG_SCHEMA_VERSION};
use crate::validation;

/// Validate `config` and write it to `path` under a schema-version header.
///
/// An invalid config is rejected before anything touches the disk.
pub fn save_config_to_path(config: &ColorFieldConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;

    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    let contents =
        format!("# colorfield configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n\n{body}");

    write_atomically(path, &contents)
}

/// Write `contents` to a `.tmp` sibling of `path`, then rename it into place.
///
/// Parent directories are created. On a failed rename the temporary file is
/// removed and `path` is left as it was.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, contents).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    std::fs::rename(&tmp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        ConfigError::ParseError(format!("failed to move config into {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), "config written");
    Ok(())
}
