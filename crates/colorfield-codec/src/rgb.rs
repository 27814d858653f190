//! Functional notation without alpha: `rgb(r,g,b)`.

use colorfield_common::{Color, FormatError, Notation};
use regex::Regex;
use std::sync::LazyLock;

use crate::channel::parse_channel;

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*([0-9]{0,3})\s*,\s*([0-9]{0,3})\s*,\s*([0-9]{0,3})\s*\)$").unwrap()
});

/// Format as `rgb(r,g,b)`. Alpha is dropped.
pub fn encode_rgb(color: Color) -> String {
    format!("rgb({},{},{})", color.red(), color.green(), color.blue())
}

/// Parse `rgb(r,g,b)`. Whitespace is allowed inside the parentheses around
/// each number; the keyword is case-insensitive. Alpha is 255.
pub fn decode_rgb(s: &str) -> Result<Color, FormatError> {
    let caps = RGB_RE
        .captures(s)
        .ok_or_else(|| FormatError::pattern(s, Notation::Rgb))?;
    let r = parse_channel(s, Notation::Rgb, &caps[1])?;
    let g = parse_channel(s, Notation::Rgb, &caps[2])?;
    let b = parse_channel(s, Notation::Rgb, &caps[3])?;
    Ok(Color::from_rgb(r, g, b))
}
