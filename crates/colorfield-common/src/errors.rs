use std::path::PathBuf;

use crate::types::Notation;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
    #[error("does not match the pattern")]
    Pattern,

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("'{0}' is not a decimal")]
    NotADecimal(String),

    #[error("channel value {0} is out of range [0, 255]")]
    ChannelOutOfRange(u32),

    #[error("alpha value {0} is out of range [0, 1]")]
    AlphaOutOfRange(String),
}

/// A string could not be decoded in the requested notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not convert '{input}' to a css {notation} color: {reason}")]
pub struct FormatError {
    pub input: String,
    pub notation: Notation,
    pub reason: FormatReason,
}

impl FormatError {
    pub fn new(input: impl Into<String>, notation: Notation, reason: FormatReason) -> Self {
        Self {
            input: input.into(),
            notation,
            reason,
        }
    }

    pub fn pattern(input: impl Into<String>, notation: Notation) -> Self {
        Self::new(input, notation, FormatReason::Pattern)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ColorFieldError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
