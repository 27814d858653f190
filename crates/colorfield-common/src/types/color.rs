use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels.
///
/// Channels are only set at construction; use [`Color::with_alpha`] to derive
/// a variant with a different alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    /// Opaque color from red, green and blue.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::from_rgb(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// CSS hex form `#rrggbb`. Alpha is dropped.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_is_opaque() {
        let c = Color::from_rgb(1, 2, 3);
        assert_eq!(c.alpha(), 255);
        assert!(c.is_opaque());
    }

    #[test]
    fn from_rgb_int_unpacks_channels() {
        let c = Color::from_rgb_int(0x0fe000);
        assert_eq!(c, Color::from_rgba(15, 224, 0, 255));
    }

    #[test]
    fn from_rgb_int_ignores_high_bits() {
        assert_eq!(Color::from_rgb_int(0xff00_0000), Color::BLACK);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_rgb(10, 20, 30).with_alpha(128);
        assert_eq!(c, Color::from_rgba(10, 20, 30, 128));
        assert!(!c.is_opaque());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 2, 3, 4));
        assert_ne!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 2, 3, 5));
    }

    #[test]
    fn css_is_lowercase_and_padded() {
        assert_eq!(Color::from_rgb(255, 0, 128).css(), "#ff0080");
        assert_eq!(Color::from_rgb(1, 2, 3).css(), "#010203");
    }

    #[test]
    fn css_drops_alpha() {
        assert_eq!(Color::from_rgba(255, 0, 128, 7).css(), "#ff0080");
    }

    #[test]
    fn constants() {
        assert_eq!(Color::WHITE.css(), "#ffffff");
        assert_eq!(Color::BLACK.css(), "#000000");
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgba(10, 20, 30, 40);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":10,"g":20,"b":30,"a":40}"#);
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }
}
