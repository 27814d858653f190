use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A textual color grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `#rgb` or `#rrggbb`, the `#` optional.
    Hex,
    /// `rgb(r,g,b)`.
    Rgb,
    /// `rgba(r,g,b,a)` with a fractional alpha.
    Rgba,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Hex, Notation::Rgb, Notation::Rgba];

    pub fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Rgba => "rgba",
        }
    }

    /// Whether the grammar carries an alpha channel.
    pub fn carries_alpha(&self) -> bool {
        matches!(self, Notation::Rgba)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown notation '{s}' (expected hex, rgb or rgba)"))
    }
}
