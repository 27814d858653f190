//! Configuration schema. Every section defaults, so partial files load.

mod field;
mod logging;

pub use field::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ColorFieldConfig {
    pub field: FieldConfig,
    pub logging: LoggingConfig,
}
