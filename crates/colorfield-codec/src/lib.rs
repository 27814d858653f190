//! CSS color string codecs.
//!
//! Converts between [`Color`] and three textual notations:
//! - hex: `#rgb` or `#rrggbb`, the `#` optional (e.g. `#00b4f0`, `0fe000`)
//! - rgb: `rgb(r,g,b)` (e.g. `rgb(0,180,240)`)
//! - rgba: `rgba(r,g,b,a)` where `a` is 0-1 (e.g. `rgba(0,180,240,0.5)`)
//!
//! Decoding never trims or guesses: input outside the grammar of the chosen
//! notation is a [`FormatError`]. Encoding always succeeds and produces text
//! that decodes back to the same color (hex and rgb drop alpha).

mod channel;
mod converter;
mod hex;
mod rgb;
mod rgba;

#[cfg(test)]
mod tests;

pub use colorfield_common::{Color, FormatError, FormatReason, Notation};
pub use converter::ColorConverter;
pub use hex::{decode_hex, encode_hex};
pub use rgb::{decode_rgb, encode_rgb};
pub use rgba::{decode_rgba, encode_rgba};

/// Encode `color` in the given notation.
pub fn encode(notation: Notation, color: Color) -> String {
    match notation {
        Notation::Hex => encode_hex(color),
        Notation::Rgb => encode_rgb(color),
        Notation::Rgba => encode_rgba(color),
    }
}

/// Decode `s` in the given notation.
pub fn decode(notation: Notation, s: &str) -> Result<Color, FormatError> {
    match notation {
        Notation::Hex => decode_hex(s),
        Notation::Rgb => decode_rgb(s),
        Notation::Rgba => decode_rgba(s),
    }
}

/// Whether `s` decodes in the given notation.
pub fn is_valid(notation: Notation, s: &str) -> bool {
    decode(notation, s).is_ok()
}

/// Guess the notation of `s` from its function prefix.
///
/// `rgba(` and `rgb(` (any case) select their notations; everything else is
/// treated as hex. Only the prefix is inspected.
pub fn detect_notation(s: &str) -> Notation {
    let prefix = |p: &str| s.get(..p.len()).is_some_and(|head| head.eq_ignore_ascii_case(p));
    if prefix("rgba(") {
        Notation::Rgba
    } else if prefix("rgb(") {
        Notation::Rgb
    } else {
        Notation::Hex
    }
}

/// Decode `s` in whichever notation [`detect_notation`] picks.
pub fn decode_any(s: &str) -> Result<Color, FormatError> {
    decode(detect_notation(s), s)
}
