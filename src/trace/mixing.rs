//! Color mixing.
//!
//! A ray's color depends only on which distinct paints it has passed
//! through, with one exception: black absorbs the ray, so the first black in
//! the sequence settles the result no matter what else is present.
//!
//! | chromatic paints seen | without white | with white      |
//! |-----------------------|---------------|-----------------|
//! | none                  | transparent   | WHITE           |
//! | one `C`               | `C`           | `LIGHT_C`       |
//! | red + blue            | PURPLE        | LIGHT_PURPLE    |
//! | red + yellow          | GREEN         | LIGHT_GREEN     |
//! | blue + yellow         | ORANGE        | LIGHT_ORANGE    |
//! | all three             | BLACK         | BLACK           |

use crate::core::{ColorCode, MixedColor};

/// Distinct primaries present in a sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Primaries {
    red: bool,
    blue: bool,
    yellow: bool,
    white: bool,
}

impl Primaries {
    fn mixed(self) -> MixedColor {
        let base = match (self.red, self.blue, self.yellow) {
            (false, false, false) if self.white => return MixedColor::White,
            (false, false, false) => return MixedColor::Transparent,
            (true, true, true) => return MixedColor::Black,
            (true, true, false) => MixedColor::Purple,
            (true, false, true) => MixedColor::Green,
            (false, true, true) => MixedColor::Orange,
            (true, false, false) => MixedColor::Red,
            (false, true, false) => MixedColor::Blue,
            (false, false, true) => MixedColor::Yellow,
        };

        if self.white {
            base.lighten()
        } else {
            base
        }
    }
}

/// Mix an ordered sequence of paints into the color a ray carries.
///
/// ```
/// use mina_ray::core::{ColorCode, MixedColor};
/// use mina_ray::trace::mix;
///
/// assert_eq!(mix(&[]), MixedColor::Transparent);
/// assert_eq!(mix(&[ColorCode::Red, ColorCode::Yellow]), MixedColor::Green);
/// assert_eq!(mix(&[ColorCode::Blue, ColorCode::White]), MixedColor::LightBlue);
/// assert_eq!(mix(&[ColorCode::Red, ColorCode::Black]), MixedColor::Absorbed);
/// ```
#[must_use]
pub fn mix(colors: &[ColorCode]) -> MixedColor {
    let mut seen = Primaries::default();

    for &color in colors {
        match color {
            ColorCode::Black => return MixedColor::Absorbed,
            ColorCode::White => seen.white = true,
            ColorCode::Red => seen.red = true,
            ColorCode::Blue => seen.blue = true,
            ColorCode::Yellow => seen.yellow = true,
            ColorCode::Transparent => {}
        }
    }

    seen.mixed()
}
