//! colorfield configuration.
//!
//! TOML-based configuration for the color field front end. All sections
//! use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colorfield_config::{load_config, config_to_json};
//!
//! let loaded = load_config(None).expect("failed to load config");
//! loaded.log();
//! println!("{}", config_to_json(&loaded.config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{ColorFieldConfig, FieldConfig, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{create_default_config, default_config_path, LoadStatus, LoadedConfig};
pub use toml_writer::save_config_to_path;

use colorfield_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created from the template if missing; an explicit
/// path must exist.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ColorFieldConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
