//! Notation-bound converter between an optional field text and an optional
//! color value.

use std::fmt;

use colorfield_common::{Color, FormatError, Notation};

/// Converts in both directions with a fixed notation. An empty value
/// (`None`) converts to an empty value without touching the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorConverter {
    notation: Notation,
}

impl ColorConverter {
    pub const fn new(notation: Notation) -> Self {
        Self { notation }
    }

    /// One converter per notation, in [`Notation::ALL`] order.
    pub fn all() -> [ColorConverter; 3] {
        Notation::ALL.map(ColorConverter::new)
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    /// Text to color.
    pub fn to_model(&self, value: Option<&str>) -> Result<Option<Color>, FormatError> {
        value.map(|s| crate::decode(self.notation, s)).transpose()
    }

    /// Color to text.
    pub fn to_presentation(&self, value: Option<Color>) -> Option<String> {
        value.map(|c| crate::encode(self.notation, c))
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(Notation::Hex)
    }
}

impl From<Notation> for ColorConverter {
    fn from(notation: Notation) -> Self {
        Self::new(notation)
    }
}

impl fmt::Display for ColorConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} converter", self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_passes_through_both_ways() {
        for converter in ColorConverter::all() {
            assert_eq!(converter.to_model(None).unwrap(), None);
            assert_eq!(converter.to_presentation(None), None);
        }
    }

    #[test]
    fn hex_converter() {
        let converter = ColorConverter::new(Notation::Hex);
        let cases = [
            (Color::WHITE, "#ffFFff"),
            (Color::from_rgb(15, 224, 0), "#0FE000"),
            (Color::WHITE, "#ffffff"),
            (Color::BLACK, "#000000"),
        ];
        for (color, text) in cases {
            assert_eq!(converter.to_model(Some(text)).unwrap(), Some(color));
            assert_eq!(
                converter.to_presentation(Some(color)).unwrap(),
                text.to_lowercase()
            );
        }
    }

    #[test]
    fn rgb_converter() {
        let converter = ColorConverter::new(Notation::Rgb);
        let cases = [
            (Color::WHITE, "rgb(255,255,255)"),
            (Color::from_rgb(15, 224, 0), "rgb(15,224,0)"),
            (Color::BLACK, "rgb(0,0,0)"),
        ];
        for (color, text) in cases {
            assert_eq!(converter.to_model(Some(text)).unwrap(), Some(color));
            assert_eq!(converter.to_presentation(Some(color)).unwrap(), text);
        }
    }

    #[test]
    fn rgba_converter() {
        let converter = ColorConverter::new(Notation::Rgba);
        let cases = [
            (Color::from_rgba(255, 255, 255, 255), "rgba(255,255,255,1)"),
            (Color::from_rgba(15, 224, 0, 0), "rgba(15,224,0,0)"),
            (Color::from_rgba(0, 0, 0, 51), "rgba(0,0,0,0.2)"),
        ];
        for (color, text) in cases {
            assert_eq!(converter.to_model(Some(text)).unwrap(), Some(color));
            assert_eq!(converter.to_presentation(Some(color)).unwrap(), text);
        }
    }

    #[test]
    fn invalid_text_is_an_error() {
        let err = ColorConverter::new(Notation::Rgb)
            .to_model(Some("#ffffff"))
            .unwrap_err();
        assert_eq!(err.notation, Notation::Rgb);
    }

    #[test]
    fn all_covers_every_notation() {
        let notations: Vec<Notation> = ColorConverter::all()
            .iter()
            .map(|c| c.notation())
            .collect();
        assert_eq!(notations, Notation::ALL.to_vec());
    }

    #[test]
    fn display_and_default() {
        assert_eq!(ColorConverter::default().notation(), Notation::Hex);
        assert_eq!(ColorConverter::from(Notation::Rgba).to_string(), "rgba converter");
    }
}
