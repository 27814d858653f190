//! Numeric group validation shared by the functional notations.

use colorfield_common::{FormatError, FormatReason, Notation};

/// Parse a captured channel group as an integer in `[0, 255]`.
///
/// An empty group (the grammar allows `rgb(,,)`) is reported as not an
/// integer rather than as a pattern mismatch.
pub(crate) fn parse_channel(
    input: &str,
    notation: Notation,
    group: &str,
) -> Result<u8, FormatError> {
    let value: u32 = group.parse().map_err(|_| {
        FormatError::new(input, notation, FormatReason::NotAnInteger(group.to_string()))
    })?;
    u8::try_from(value)
        .map_err(|_| FormatError::new(input, notation, FormatReason::ChannelOutOfRange(value)))
}

/// Parse a captured alpha group as a fraction in `[0, 1]` and scale to 0-255.
pub(crate) fn parse_alpha(input: &str, group: &str) -> Result<u8, FormatError> {
    let fraction: f64 = group.parse().map_err(|_| {
        FormatError::new(input, Notation::Rgba, FormatReason::NotADecimal(group.to_string()))
    })?;
    if !(0.0..=1.0).contains(&fraction) {
        return Err(FormatError::new(
            input,
            Notation::Rgba,
            FormatReason::AlphaOutOfRange(group.to_string()),
        ));
    }
    Ok((fraction * 255.0).round() as u8)
}

/// Render an 8-bit alpha as a fraction of 255.
///
/// Whole quotients print as integers (`0`, `1`); everything else uses the
/// shortest decimal that parses back to the same `f64`.
pub(crate) fn format_alpha(alpha: u8) -> String {
    let fraction = f64::from(alpha) / 255.0;
    if fraction.fract() == 0.0 {
        format!("{}", fraction as u8)
    } else {
        format!("{fraction}")
    }
}
