//! Grid geometry: coordinates, travel directions, board sides and the
//! boundary positions rays enter and leave through.
//!
//! ## Coordinates
//!
//! Cells are addressed as `(row, col)`, row 0 at the top and col 0 on the
//! left. Host records use the opposite axis order (see [`CellRecord`]).
//!
//! ## Boundary labels
//!
//! Every position just outside the board has a label made of the side letter
//! and a 1-based index along that side:
//!
//! ```
//! use mina_ray::core::{BoundaryLabel, Side};
//!
//! let label = BoundaryLabel::new(Side::Top, 3);
//! assert_eq!(label.to_string(), "T4");
//! ```
//!
//! [`CellRecord`]: super::CellRecord

use serde::{Deserialize, Serialize};

use super::config::GridConfig;
use super::error::{Result, TraceError};

/// A cell position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate from a row and a column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`.
    ///
    /// Returns `None` when the move leaves a `rows` x `cols` board.
    #[must_use]
    pub fn step(self, direction: Direction, rows: u8, cols: u8) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offsets of a single step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The side a ray crosses when it leaves the board travelling this way.
    #[must_use]
    pub const fn exit_side(self) -> Side {
        match self {
            Direction::Up => Side::Top,
            Direction::Down => Side::Bottom,
            Direction::Left => Side::Left,
            Direction::Right => Side::Right,
        }
    }
}

/// One of the four board edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in survey order (clockwise from the top).
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Travel direction of a ray entering through this side.
    #[must_use]
    pub const fn initial_direction(self) -> Direction {
        match self {
            Side::Top => Direction::Down,
            Side::Bottom => Direction::Up,
            Side::Left => Direction::Right,
            Side::Right => Direction::Left,
        }
    }

    /// Number of boundary positions along this side.
    #[must_use]
    pub const fn len(self, config: &GridConfig) -> usize {
        match self {
            Side::Top | Side::Bottom => config.cols as usize,
            Side::Left | Side::Right => config.rows as usize,
        }
    }

    /// Single-letter prefix used in labels.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Top => 'T',
            Side::Right => 'R',
            Side::Bottom => 'B',
            Side::Left => 'L',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        f.write_str(name)
    }
}

/// A position just outside the board, identified by side and 0-based index.
///
/// Displayed with a 1-based index (`T1`..`T10`, `L1`..`L8` on the default
/// board). Translating these into user-facing labels is left to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoundaryLabel {
    pub side: Side,
    pub index: u8,
}

impl BoundaryLabel {
    #[must_use]
    pub const fn new(side: Side, index: u8) -> Self {
        Self { side, index }
    }

    /// Label of the edge crossed when a ray at `last` steps off the board
    /// heading `direction`.
    ///
    /// The travel direction picks the side, which matters for corner cells
    /// that touch two edges.
    #[must_use]
    pub const fn leaving(last: Coord, direction: Direction) -> Self {
        let side = direction.exit_side();
        let index = match side {
            Side::Top | Side::Bottom => last.col,
            Side::Left | Side::Right => last.row,
        };
        Self { side, index }
    }
}

impl std::fmt::Display for BoundaryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side.letter(), u16::from(self.index) + 1)
    }
}

/// Where a ray starts: a boundary position plus the direction it implies.
///
/// Constructed through [`EntryPoint::new`], which checks the index against
/// the board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryPoint {
    label: BoundaryLabel,
}

impl EntryPoint {
    /// Validate `index` against `side` on a board described by `config`.
    pub fn new(side: Side, index: usize, config: &GridConfig) -> Result<Self> {
        let len = side.len(config);
        if index >= len {
            return Err(TraceError::InvalidEntry { side, index, len });
        }
        // len fits in u8, so index does too
        Ok(Self {
            label: BoundaryLabel::new(side, index as u8),
        })
    }

    /// Re-enter the board through a previously recorded label.
    pub fn from_label(label: BoundaryLabel, config: &GridConfig) -> Result<Self> {
        Self::new(label.side, usize::from(label.index), config)
    }

    /// Every entry point of a board, clockwise from the top-left corner
    /// within each side: top, right, bottom, left.
    pub fn all(config: &GridConfig) -> impl Iterator<Item = EntryPoint> + '_ {
        Side::ALL.into_iter().flat_map(move |side| {
            (0..side.len(config)).map(move |index| EntryPoint {
                label: BoundaryLabel::new(side, index as u8),
            })
        })
    }

    #[must_use]
    pub const fn side(self) -> Side {
        self.label.side
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.label.index as usize
    }

    #[must_use]
    pub const fn label(self) -> BoundaryLabel {
        self.label
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        self.label.side.initial_direction()
    }

    /// The first interior cell, one step in from the virtual entry point.
    #[must_use]
    pub const fn first_cell(self, config: &GridConfig) -> Coord {
        let i = self.label.index;
        match self.label.side {
            Side::Top => Coord::new(0, i),
            Side::Bottom => Coord::new(config.rows - 1, i),
            Side::Left => Coord::new(i, 0),
            Side::Right => Coord::new(i, config.cols - 1),
        }
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.label, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_and_off_board() {
        let c = Coord::new(0, 0);
        assert_eq!(c.step(Direction::Down, 8, 10), Some(Coord::new(1, 0)));
        assert_eq!(c.step(Direction::Right, 8, 10), Some(Coord::new(0, 1)));
        assert_eq!(c.step(Direction::Up, 8, 10), None);
        assert_eq!(c.step(Direction::Left, 8, 10), None);

        let corner = Coord::new(7, 9);
        assert_eq!(corner.step(Direction::Down, 8, 10), None);
        assert_eq!(corner.step(Direction::Right, 8, 10), None);
    }

    #[test]
    fn test_initial_directions() {
        assert_eq!(Side::Top.initial_direction(), Direction::Down);
        assert_eq!(Side::Bottom.initial_direction(), Direction::Up);
        assert_eq!(Side::Left.initial_direction(), Direction::Right);
        assert_eq!(Side::Right.initial_direction(), Direction::Left);
    }

    #[test]
    fn test_opposite() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
    }

    #[test]
    fn test_entry_point_validation() {
        let config = GridConfig::default();

        assert!(EntryPoint::new(Side::Top, 9, &config).is_ok());
        assert!(EntryPoint::new(Side::Left, 7, &config).is_ok());

        let err = EntryPoint::new(Side::Top, 10, &config).unwrap_err();
        assert_eq!(err, TraceError::InvalidEntry { side: Side::Top, index: 10, len: 10 });

        assert!(EntryPoint::new(Side::Right, 8, &config).is_err());
    }

    #[test]
    fn test_first_cell() {
        let config = GridConfig::default();
        let at = |side, i| EntryPoint::new(side, i, &config).unwrap().first_cell(&config);

        assert_eq!(at(Side::Top, 3), Coord::new(0, 3));
        assert_eq!(at(Side::Bottom, 3), Coord::new(7, 3));
        assert_eq!(at(Side::Left, 2), Coord::new(2, 0));
        assert_eq!(at(Side::Right, 2), Coord::new(2, 9));
    }

    #[test]
    fn test_all_entry_points() {
        let config = GridConfig::default();
        let all: Vec<_> = EntryPoint::all(&config).collect();

        assert_eq!(all.len(), 36);
        assert_eq!(all[0].label(), BoundaryLabel::new(Side::Top, 0));
        assert_eq!(all[10].label(), BoundaryLabel::new(Side::Right, 0));
        assert_eq!(all[18].label(), BoundaryLabel::new(Side::Bottom, 0));
        assert_eq!(all[35].label(), BoundaryLabel::new(Side::Left, 7));
    }

    #[test]
    fn test_leaving_label_uses_direction_at_corners() {
        let corner = Coord::new(0, 9);
        assert_eq!(BoundaryLabel::leaving(corner, Direction::Up), BoundaryLabel::new(Side::Top, 9));
        assert_eq!(BoundaryLabel::leaving(corner, Direction::Right), BoundaryLabel::new(Side::Right, 0));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(BoundaryLabel::new(Side::Bottom, 3).to_string(), "B4");
        assert_eq!(BoundaryLabel::new(Side::Right, 7).to_string(), "R8");
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn test_serialization() {
        let label = BoundaryLabel::new(Side::Left, 2);
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"side":"left","index":2}"#);
        let deserialized: BoundaryLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(label, deserialized);
    }
}
