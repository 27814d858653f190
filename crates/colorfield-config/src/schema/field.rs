//! Color field configuration.

use colorfield_common::{Color, FormatError, Notation};
use serde::{Deserialize, Serialize};

/// How the color field presents and seeds its value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Notation used to render and read the field text.
    pub notation: Notation,
    /// Value the field starts with. Any notation.
    pub initial_color: String,
    /// Color shown when the field is empty. Any notation.
    pub default_color: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            notation: Notation::Hex,
            initial_color: "rgb(0,180,240)".into(),
            default_color: "#ffffff".into(),
        }
    }
}

impl FieldConfig {
    pub fn initial_color(&self) -> Result<Color, FormatError> {
        colorfield_codec::decode_any(&self.initial_color)
    }

    pub fn default_color(&self) -> Result<Color, FormatError> {
        colorfield_codec::decode_any(&self.default_color)
    }
}
