//! Core board types: coordinates, colors, cells, the grid snapshot,
//! configuration and errors.
//!
//! Everything here is plain data. The ray simulation itself lives in
//! [`trace`](crate::trace).

pub mod cell;
pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellRecord, Orientation};
pub use color::{ColorCode, MixedColor};
pub use config::{GridConfig, DEFAULT_COLS, DEFAULT_ROWS};
pub use direction::{BoundaryLabel, Coord, Direction, EntryPoint, Side};
pub use error::{Result, TraceError};
pub use grid::Grid;
