//! Cell contents: paint plus mirror orientation.
//!
//! ## Orientation codes
//!
//! | code | meaning                 |
//! |------|-------------------------|
//! | 0    | straight through        |
//! | 1    | stop                    |
//! | 2    | reflect left <-> up     |
//! | 3    | reflect right <-> up    |
//! | 4    | reflect left <-> down   |
//! | 5    | reflect right <-> down  |
//!
//! Which incoming headings a mirror actually turns is decided by a
//! [`Reflector`](crate::trace::Reflector); the orientation only names the
//! pair.

use serde::{Deserialize, Serialize};

use super::color::ColorCode;
use super::direction::Direction;
use super::error::{Result, TraceError};

/// Mirror behaviour of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Orientation {
    #[default]
    Straight,
    Stop,
    LeftUp,
    RightUp,
    LeftDown,
    RightDown,
}

impl Orientation {
    /// Decode a raw orientation code.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Orientation::Straight),
            1 => Ok(Orientation::Stop),
            2 => Ok(Orientation::LeftUp),
            3 => Ok(Orientation::RightUp),
            4 => Ok(Orientation::LeftDown),
            5 => Ok(Orientation::RightDown),
            other => Err(TraceError::InvalidOrientation(other)),
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Orientation::Straight => 0,
            Orientation::Stop => 1,
            Orientation::LeftUp => 2,
            Orientation::RightUp => 3,
            Orientation::LeftDown => 4,
            Orientation::RightDown => 5,
        }
    }

    /// The two directions a mirror orientation names, `None` for straight
    /// and stop cells.
    #[must_use]
    pub const fn mirror_pair(self) -> Option<(Direction, Direction)> {
        match self {
            Orientation::LeftUp => Some((Direction::Left, Direction::Up)),
            Orientation::RightUp => Some((Direction::Right, Direction::Up)),
            Orientation::LeftDown => Some((Direction::Left, Direction::Down)),
            Orientation::RightDown => Some((Direction::Right, Direction::Down)),
            Orientation::Straight | Orientation::Stop => None,
        }
    }

    #[must_use]
    pub const fn is_mirror(self) -> bool {
        self.mirror_pair().is_some()
    }
}

impl TryFrom<u8> for Orientation {
    type Error = TraceError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(i64::from(code))
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> u8 {
        orientation.code()
    }
}

/// One painted or mirrored cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub color: ColorCode,
    pub orientation: Orientation,
}

impl Cell {
    #[must_use]
    pub const fn new(color: ColorCode, orientation: Orientation) -> Self {
        Self { color, orientation }
    }

    /// A painted cell that lets the ray through.
    #[must_use]
    pub const fn painted(color: ColorCode) -> Self {
        Self::new(color, Orientation::Straight)
    }

    /// An unpainted mirror or stop cell.
    #[must_use]
    pub const fn mirror(orientation: Orientation) -> Self {
        Self::new(ColorCode::Transparent, orientation)
    }

    /// Decode raw codes. Missing values mean transparent and straight.
    pub fn parse(color: Option<&str>, orientation: Option<i64>) -> Result<Self> {
        let color = color
            .map(str::parse::<ColorCode>)
            .transpose()?
            .unwrap_or_default();
        let orientation = orientation
            .map(Orientation::from_code)
            .transpose()?
            .unwrap_or_default();
        Ok(Self { color, orientation })
    }
}

/// A cell as the host stores it.
///
/// Host data keys cells by `(NOTE1, NOTE2)` = `(col, row)`. Values are kept
/// raw here and checked when a [`Grid`](super::Grid) is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(rename = "NOTE1")]
    pub col: i64,

    #[serde(rename = "NOTE2")]
    pub row: i64,

    #[serde(rename = "colorCode", default, skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<i64>,
}

impl CellRecord {
    /// Build a record from raw values.
    pub fn new(col: i64, row: i64, color_code: Option<&str>, orientation: Option<i64>) -> Self {
        Self {
            col,
            row,
            color_code: color_code.map(str::to_string),
            orientation,
        }
    }

    /// Decode the cell contents.
    pub fn cell(&self) -> Result<Cell> {
        Cell::parse(self.color_code.as_deref(), self.orientation)
    }
}
