//! Hex notation: `#rgb` / `#rrggbb`, the leading `#` optional.

use colorfield_common::{Color, FormatError, Notation};
use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Format as `#rrggbb` (lowercase). Alpha is dropped.
pub fn encode_hex(color: Color) -> String {
    color.css()
}

/// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case). Alpha is 255.
///
/// Three-digit input doubles each digit (`#abc` is `#aabbcc`).
pub fn decode_hex(s: &str) -> Result<Color, FormatError> {
    let caps = HEX_RE
        .captures(s)
        .ok_or_else(|| FormatError::pattern(s, Notation::Hex))?;
    let digits = &caps[1];

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let rgb = u32::from_str_radix(&expanded, 16)
        .map_err(|_| FormatError::pattern(s, Notation::Hex))?;
    Ok(Color::from_rgb_int(rgb))
}
