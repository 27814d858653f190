//! Functional notation with alpha: `rgba(r,g,b,a)`, `a` a fraction in 0-1.

use colorfield_common::{Color, FormatError, Notation};
use regex::Regex;
use std::sync::LazyLock;

use crate::channel::{format_alpha, parse_alpha, parse_channel};

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^rgba\(\s*([0-9]{0,3})\s*,\s*([0-9]{0,3})\s*,\s*([0-9]{0,3})\s*,",
        r"\s*([01](?:\.[0-9]+)?)\s*\)$",
    ))
    .unwrap()
});

/// Format as `rgba(r,g,b,a)` with `a = alpha / 255`.
pub fn encode_rgba(color: Color) -> String {
    format!(
        "rgba({},{},{},{})",
        color.red(),
        color.green(),
        color.blue(),
        format_alpha(color.alpha())
    )
}

/// Parse `rgba(r,g,b,a)`.
///
/// The alpha token must be `0`, `1`, `0.<digits>` or `1.<digits>` and lie in
/// `[0, 1]`; it is scaled to 0-255 with `round(a * 255)`.
pub fn decode_rgba(s: &str) -> Result<Color, FormatError> {
    let caps = RGBA_RE
        .captures(s)
        .ok_or_else(|| FormatError::pattern(s, Notation::Rgba))?;
    let r = parse_channel(s, Notation::Rgba, &caps[1])?;
    let g = parse_channel(s, Notation::Rgba, &caps[2])?;
    let b = parse_channel(s, Notation::Rgba, &caps[3])?;
    let a = parse_alpha(s, &caps[4])?;
    Ok(Color::from_rgba(r, g, b, a))
}
