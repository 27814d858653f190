//! Configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod field;

#[cfg(test)]
mod tests;

use crate::schema::ColorFieldConfig;
use colorfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ColorFieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    field::validate_field(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
