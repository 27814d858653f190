//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ColorFieldConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn accepts_every_notation() {
    let mut config = ColorFieldConfig::default();
    for color in ["#abc", "00b4f0", "rgb(1,2,3)", "rgba(0,0,0,0.5)"] {
        config.field.initial_color = color.into();
        config.field.default_color = color.into();
        assert!(validate(&config).is_ok(), "{color}");
    }
}

#[test]
fn catches_bad_initial_color() {
    let mut config = ColorFieldConfig::default();
    config.field.initial_color = "rgb(256,0,0)".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("field.initial_color"));
    assert!(err.contains("rgb(256,0,0)"));
}

#[test]
fn catches_bad_default_color() {
    let mut config = ColorFieldConfig::default();
    config.field.default_color = "white".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("field.default_color"));
}

#[test]
fn collects_all_errors() {
    let mut config = ColorFieldConfig::default();
    config.field.initial_color = "".into();
    config.field.default_color = "rgba(0,0,0,2)".into();
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("field.initial_color"));
    assert!(msg.contains("field.default_color"));
    assert!(msg.contains("; "));
}
