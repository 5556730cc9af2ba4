//! Color codes.
//!
//! `ColorCode` is what a cell is painted with. `MixedColor` is what a ray
//! carries after passing through painted cells; see
//! [`mix`](crate::trace::mix) for how one becomes the other.

use serde::{Deserialize, Serialize};

use super::error::TraceError;

/// Raw paint on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorCode {
    White,
    Red,
    Blue,
    Yellow,
    Black,
    /// No paint; the cell has no color effect.
    #[default]
    #[serde(rename = "NONE")]
    Transparent,
}

impl ColorCode {
    /// Every code, transparent last.
    pub const ALL: [ColorCode; 6] = [
        ColorCode::White,
        ColorCode::Red,
        ColorCode::Blue,
        ColorCode::Yellow,
        ColorCode::Black,
        ColorCode::Transparent,
    ];

    /// Code as written in puzzle data.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ColorCode::White => "WHITE",
            ColorCode::Red => "RED",
            ColorCode::Blue => "BLUE",
            ColorCode::Yellow => "YELLOW",
            ColorCode::Black => "BLACK",
            ColorCode::Transparent => "NONE",
        }
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        matches!(self, ColorCode::Transparent)
    }

    /// Red, blue or yellow.
    #[must_use]
    pub const fn is_chromatic(self) -> bool {
        matches!(self, ColorCode::Red | ColorCode::Blue | ColorCode::Yellow)
    }
}

impl std::str::FromStr for ColorCode {
    type Err = TraceError;

    /// Parse a code, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ColorCode::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TraceError::InvalidColor(s.to_string()))
    }
}

impl std::fmt::Display for ColorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Color carried by a ray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MixedColor {
    /// No paint encountered yet.
    #[default]
    Transparent,
    White,
    Red,
    Blue,
    Yellow,
    Purple,
    Green,
    Orange,
    LightRed,
    LightBlue,
    LightYellow,
    LightPurple,
    LightGreen,
    LightOrange,
    /// Red, blue and yellow together.
    Black,
    /// The ray hit a black cell and went no further.
    Absorbed,
}

impl MixedColor {
    /// The white-tinted form of a chromatic color.
    ///
    /// Colors without a light form are returned unchanged.
    #[must_use]
    pub const fn lighten(self) -> Self {
        match self {
            MixedColor::Red => MixedColor::LightRed,
            MixedColor::Blue => MixedColor::LightBlue,
            MixedColor::Yellow => MixedColor::LightYellow,
            MixedColor::Purple => MixedColor::LightPurple,
            MixedColor::Green => MixedColor::LightGreen,
            MixedColor::Orange => MixedColor::LightOrange,
            other => other,
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(
            self,
            MixedColor::LightRed
                | MixedColor::LightBlue
                | MixedColor::LightYellow
                | MixedColor::LightPurple
                | MixedColor::LightGreen
                | MixedColor::LightOrange
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MixedColor::Transparent => "TRANSPARENT",
            MixedColor::White => "WHITE",
            MixedColor::Red => "RED",
            MixedColor::Blue => "BLUE",
            MixedColor::Yellow => "YELLOW",
            MixedColor::Purple => "PURPLE",
            MixedColor::Green => "GREEN",
            MixedColor::Orange => "ORANGE",
            MixedColor::LightRed => "LIGHT_RED",
            MixedColor::LightBlue => "LIGHT_BLUE",
            MixedColor::LightYellow => "LIGHT_YELLOW",
            MixedColor::LightPurple => "LIGHT_PURPLE",
            MixedColor::LightGreen => "LIGHT_GREEN",
            MixedColor::LightOrange => "LIGHT_ORANGE",
            MixedColor::Black => "BLACK",
            MixedColor::Absorbed => "ABSORBED",
        }
    }
}

impl std::fmt::Display for MixedColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
