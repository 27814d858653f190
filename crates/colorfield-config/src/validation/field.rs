//! Field section validation: configured colors must decode.

use crate::schema::ColorFieldConfig;

/// Push an error if `value` is not a color in any notation.
fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if let Err(e) = colorfield_codec::decode_any(value) {
        errors.push(format!("{name}: {e}"));
    }
}

pub(crate) fn validate_field(errors: &mut Vec<String>, config: &ColorFieldConfig) {
    validate_color(errors, "field.initial_color", &config.field.initial_color);
    validate_color(errors, "field.default_color", &config.field.default_color);
}
