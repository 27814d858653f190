//! Shared types for the colorfield workspace: the [`Color`] value, the
//! [`Notation`] tag and the error types every other crate reports through.

pub mod errors;
pub mod types;

pub use errors::{ColorFieldError, ConfigError, FormatError, FormatReason};
pub use types::{Color, Notation};

pub type Result<T> = std::result::Result<T, ColorFieldError>;
