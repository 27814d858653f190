//! Subcommand implementations. Each returns a serializable report; printing
//! is left to `main`.

use std::fmt;
use std::path::{Path, PathBuf};

use colorfield_codec::ColorConverter;
use colorfield_common::{Color, ConfigError, FormatError, Notation};
use colorfield_config::{ColorFieldConfig, FieldConfig, LoadStatus, LoadedConfig};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub from: Notation,
    pub to: Notation,
    pub color: Color,
    pub output: String,
    /// The target notation cannot express the input's transparency.
    pub alpha_dropped: bool,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

pub fn convert(
    value: &str,
    from: Option<Notation>,
    to: Notation,
) -> Result<Conversion, FormatError> {
    let from = from.unwrap_or_else(|| colorfield_codec::detect_notation(value));
    let color = colorfield_codec::decode(from, value)?;
    let output = colorfield_codec::encode(to, color);
    let alpha_dropped = !to.carries_alpha() && !color.is_opaque();
    if alpha_dropped {
        tracing::warn!(alpha = color.alpha(), %to, "{to} has no alpha channel, dropping it");
    }
    tracing::debug!(%from, %to, input = value, %output, "converted");
    Ok(Conversion {
        input: value.to_string(),
        from,
        to,
        color,
        output,
        alpha_dropped,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub notation: Notation,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.color, &self.error) {
            (Some(color), _) => write!(
                f,
                "valid {}: r={} g={} b={} a={}",
                self.notation,
                color.red(),
                color.green(),
                color.blue(),
                color.alpha()
            ),
            (None, Some(error)) => write!(f, "invalid: {error}"),
            (None, None) => write!(f, "invalid"),
        }
    }
}

pub fn check(value: &str, notation: Option<Notation>) -> CheckReport {
    let notation = notation.unwrap_or_else(|| colorfield_codec::detect_notation(value));
    match colorfield_codec::decode(notation, value) {
        Ok(color) => CheckReport {
            input: value.to_string(),
            notation,
            valid: true,
            color: Some(color),
            error: None,
        },
        Err(e) => CheckReport {
            input: value.to_string(),
            notation,
            valid: false,
            color: None,
            error: Some(e.to_string()),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub notation: Notation,
    pub text: Option<String>,
}

/// A field value as each converter would present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowReport {
    pub value: Option<Color>,
    /// Color the picker displays: the value, or the default when empty.
    pub client_color: Color,
    pub renderings: Vec<Rendering>,
}

impl fmt::Display for ShowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.renderings {
            writeln!(f, "{:<5} {}", r.notation, r.text.as_deref().unwrap_or("(empty)"))?;
        }
        write!(f, "shown {}", self.client_color.css())
    }
}

pub fn show(value: Option<Color>, default_color: Color) -> ShowReport {
    let renderings = ColorConverter::all()
        .iter()
        .map(|converter| Rendering {
            notation: converter.notation(),
            text: converter.to_presentation(value),
        })
        .collect();
    ShowReport {
        value,
        client_color: value.unwrap_or(default_color),
        renderings,
    }
}

/// Resolve the value `show` should render.
///
/// An explicit value is decoded with the configured field notation's
/// converter first and falls back to detection, so any notation is accepted.
pub fn show_value(
    field: &FieldConfig,
    value: Option<&str>,
    empty: bool,
) -> Result<Option<Color>, FormatError> {
    if empty {
        return Ok(None);
    }
    match value {
        Some(text) => match ColorConverter::new(field.notation).to_model(Some(text)) {
            Ok(color) => Ok(color),
            Err(_) => colorfield_codec::decode_any(text).map(Some),
        },
        None => field.initial_color().map(Some),
    }
}

/// Field settings given to `init-config`.
#[derive(Debug, Default)]
pub struct FieldOverrides {
    pub notation: Option<Notation>,
    pub initial_color: Option<String>,
    pub default_color: Option<String>,
}

impl FieldOverrides {
    fn is_empty(&self) -> bool {
        self.notation.is_none() && self.initial_color.is_none() && self.default_color.is_none()
    }

    fn apply(self, field: &mut FieldConfig) {
        if let Some(notation) = self.notation {
            field.notation = notation;
        }
        if let Some(color) = self.initial_color {
            field.initial_color = color;
        }
        if let Some(color) = self.default_color {
            field.default_color = color;
        }
    }
}

/// Write a config file at `path`.
///
/// Without overrides the commented template is written. Otherwise the
/// default config with the overrides applied is validated and saved.
pub fn init_config(
    path: &Path,
    force: bool,
    overrides: FieldOverrides,
) -> colorfield_common::Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()).into());
    }
    if overrides.is_empty() {
        colorfield_config::create_default_config(path)?;
        return Ok(());
    }
    let mut config = ColorFieldConfig::default();
    overrides.apply(&mut config.field);
    colorfield_config::save_config_to_path(&config, path)?;
    Ok(())
}

/// The effective config and where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub config: ColorFieldConfig,
}

impl fmt::Display for ConfigReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => writeln!(f, "source: {} ({})", self.source, path.display())?,
            None => writeln!(f, "source: {}", self.source)?,
        }
        if let Some(warning) = &self.warning {
            writeln!(f, "warning: {warning}")?;
        }
        write!(f, "{}", colorfield_config::config_to_json(&self.config))
    }
}

/// `None` means loading failed outright and the defaults are in use.
pub fn config_report(loaded: Option<&LoadedConfig>) -> ConfigReport {
    let Some(loaded) = loaded else {
        return ConfigReport {
            path: None,
            source: "defaults",
            warning: None,
            config: ColorFieldConfig::default(),
        };
    };
    let (source, warning) = match &loaded.status {
        LoadStatus::Loaded => ("file", None),
        LoadStatus::Created => ("created", None),
        LoadStatus::FellBack(e) => ("defaults", Some(e.to_string())),
    };
    ConfigReport {
        path: Some(loaded.path.clone()),
        source,
        warning,
        config: loaded.config.clone(),
    }
}

pub fn default_color(field: &FieldConfig) -> Result<Color, ConfigError> {
    field
        .default_color()
        .map_err(|e| ConfigError::ValidationError(format!("field.default_color: {e}")))
}
