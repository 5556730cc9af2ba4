//! Immutable board snapshot.
//!
//! A `Grid` is a sparse map from coordinate to [`Cell`]; coordinates without
//! an entry are transparent. It is backed by `im::OrdMap`, so cloning is
//! O(1) and an edited copy (a host overlay on top of the authoritative map)
//! shares structure with the original:
//!
//! ```
//! use mina_ray::core::{Cell, ColorCode, Coord, Grid};
//!
//! let base = Grid::default();
//! let edited = base.with_cell(Coord::new(2, 3), Cell::painted(ColorCode::Red)).unwrap();
//!
//! assert!(base.get(Coord::new(2, 3)).is_none());
//! assert_eq!(edited.get(Coord::new(2, 3)), Some(&Cell::painted(ColorCode::Red)));
//! ```
//!
//! Serialized grids use the host's record format, and deserializing runs the
//! same validation as [`Grid::from_records`].

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellRecord, Orientation};
use super::config::GridConfig;
use super::direction::Coord;
use super::error::{Result, TraceError};

/// A validated, immutable board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData", into = "GridData")]
pub struct Grid {
    config: GridConfig,
    cells: OrdMap<Coord, Cell>,
}

impl Grid {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            cells: OrdMap::new(),
        }
    }

    /// Build a board from host records.
    ///
    /// Every record is checked: coordinates must be on the board, codes must
    /// be known, and no coordinate may appear twice.
    pub fn from_records<'a, I>(config: GridConfig, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a CellRecord>,
    {
        config.validate()?;
        let mut grid = Self::new(config);

        for record in records {
            let coord = grid.record_coord(record)?;
            let cell = record.cell()?;
            if grid.cells.insert(coord, cell).is_some() {
                return Err(TraceError::DuplicateCell {
                    col: coord.col,
                    row: coord.row,
                });
            }
        }

        Ok(grid)
    }

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.config.rows
    }

    #[must_use]
    pub fn cols(&self) -> u8 {
        self.config.cols
    }

    /// Is `coord` on the board?
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.config.rows && coord.col < self.config.cols
    }

    /// Cell at `coord`, `None` when transparent.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Number of non-transparent entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Entries in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().map(|(coord, cell)| (*coord, *cell))
    }

    /// Set a cell in place, replacing any previous entry.
    pub fn insert(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        self.check_bounds(coord)?;
        self.cells.insert(coord, cell);
        Ok(())
    }

    /// Clear a cell, returning what was there.
    pub fn remove(&mut self, coord: Coord) -> Option<Cell> {
        self.cells.remove(&coord)
    }

    /// A copy of this snapshot with one cell replaced.
    pub fn with_cell(&self, coord: Coord, cell: Cell) -> Result<Self> {
        self.check_bounds(coord)?;
        Ok(Self {
            config: self.config.clone(),
            cells: self.cells.update(coord, cell),
        })
    }

    /// The board as host records, row-major.
    #[must_use]
    pub fn to_records(&self) -> Vec<CellRecord> {
        self.cells()
            .map(|(coord, cell)| CellRecord {
                col: i64::from(coord.col),
                row: i64::from(coord.row),
                color_code: (!cell.color.is_transparent()).then(|| cell.color.code().to_string()),
                orientation: (cell.orientation != Orientation::Straight)
                    .then(|| i64::from(cell.orientation.code())),
            })
            .collect()
    }

    fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(self.out_of_bounds(i64::from(coord.col), i64::from(coord.row)))
        }
    }

    fn record_coord(&self, record: &CellRecord) -> Result<Coord> {
        let in_range = |v: i64, max: u8| v >= 0 && v < i64::from(max);
        if in_range(record.col, self.config.cols) && in_range(record.row, self.config.rows) {
            // both values are below a u8 bound
            Ok(Coord::new(record.row as u8, record.col as u8))
        } else {
            Err(self.out_of_bounds(record.col, record.row))
        }
    }

    fn out_of_bounds(&self, col: i64, row: i64) -> TraceError {
        TraceError::CellOutOfBounds {
            col,
            row,
            rows: self.config.rows,
            cols: self.config.cols,
        }
    }
}

/// Wire form of a [`Grid`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct GridData {
    config: GridConfig,
    cells: Vec<CellRecord>,
}

impl TryFrom<GridData> for Grid {
    type Error = TraceError;

    fn try_from(data: GridData) -> Result<Self> {
        Grid::from_records(data.config, &data.cells)
    }
}

impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        Self {
            cells: grid.to_records(),
            config: grid.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorCode;

    #[test]
    fn test_from_records_swaps_axes() {
        let records = [CellRecord::new(3, 2, Some("RED"), None)];
        let grid = Grid::from_records(GridConfig::default(), &records).unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(Coord::new(2, 3)), Some(&Cell::painted(ColorCode::Red)));
        assert!(grid.get(Coord::new(3, 2)).is_none());
    }

    #[test]
    fn test_from_records_rejects_off_board() {
        let records = [CellRecord::new(10, 0, Some("RED"), None)];
        let err = Grid::from_records(GridConfig::default(), &records).unwrap_err();
        assert_eq!(
            err,
            TraceError::CellOutOfBounds { col: 10, row: 0, rows: 8, cols: 10 }
        );

        let records = [CellRecord::new(0, -1, None, Some(1))];
        assert!(Grid::from_records(GridConfig::default(), &records).is_err());
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let records = [
            CellRecord::new(1, 1, Some("RED"), None),
            CellRecord::new(1, 1, Some("BLUE"), None),
        ];
        let err = Grid::from_records(GridConfig::default(), &records).unwrap_err();
        assert_eq!(err, TraceError::DuplicateCell { col: 1, row: 1 });
    }

    #[test]
    fn test_from_records_rejects_bad_codes() {
        let records = [CellRecord::new(0, 0, Some("GREEN"), None)];
        assert!(matches!(
            Grid::from_records(GridConfig::default(), &records),
            Err(TraceError::InvalidColor(_))
        ));

        let records = [CellRecord::new(0, 0, None, Some(12))];
        assert!(matches!(
            Grid::from_records(GridConfig::default(), &records),
            Err(TraceError::InvalidOrientation(12))
        ));
    }

    #[test]
    fn test_with_cell_leaves_original() {
        let base = Grid::default();
        let edited = base
            .with_cell(Coord::new(0, 0), Cell::mirror(Orientation::Stop))
            .unwrap();

        assert!(base.is_empty());
        assert_eq!(edited.len(), 1);
        assert!(base.with_cell(Coord::new(8, 0), Cell::default()).is_err());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut grid = Grid::default();
        grid.insert(Coord::new(7, 9), Cell::painted(ColorCode::Black)).unwrap();
        assert!(grid.insert(Coord::new(7, 10), Cell::default()).is_err());

        assert_eq!(grid.remove(Coord::new(7, 9)), Some(Cell::painted(ColorCode::Black)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cells_row_major() {
        let mut grid = Grid::default();
        grid.insert(Coord::new(3, 0), Cell::painted(ColorCode::Red)).unwrap();
        grid.insert(Coord::new(1, 5), Cell::painted(ColorCode::Blue)).unwrap();
        grid.insert(Coord::new(1, 2), Cell::painted(ColorCode::White)).unwrap();

        let coords: Vec<_> = grid.cells().map(|(c, _)| c).collect();
        assert_eq!(coords, vec![Coord::new(1, 2), Coord::new(1, 5), Coord::new(3, 0)]);
    }

    #[test]
    fn test_serialization_uses_records() {
        let mut grid = Grid::default();
        grid.insert(Coord::new(2, 4), Cell::new(ColorCode::Yellow, Orientation::LeftDown))
            .unwrap();
        grid.insert(Coord::new(0, 1), Cell::mirror(Orientation::Stop)).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains(r#"{"NOTE1":4,"NOTE2":2,"colorCode":"YELLOW","orientation":4}"#));
        assert!(json.contains(r#"{"NOTE1":1,"NOTE2":0,"orientation":1}"#));

        let deserialized: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{"config":{"rows":8,"cols":10,"max_steps":320,"detect_cycles":true},
                       "cells":[{"NOTE1":0,"NOTE2":9,"colorCode":"RED"}]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
