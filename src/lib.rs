//! # mina-ray
//!
//! Light-ray tracing and color mixing for the mina grid puzzle.
//!
//! A ray enters an 8x10 board from one of its edges, passes through painted
//! cells picking up color, turns at mirrors, and ends up absorbed by black
//! paint, stopped inside the board, or leaving through another edge.
//!
//! ## Design Principles
//!
//! 1. **Pure traces**: a trace reads an immutable [`Grid`] snapshot and
//!    returns a [`TraceResult`]. No state survives between calls.
//!
//! 2. **Reject bad data**: unknown color or orientation codes, off-board
//!    cells and bad entry indices are errors, never silently defaulted.
//!
//! 3. **Bounded**: every trace has a step limit and cycle detection, so a
//!    broken mirror layout surfaces as [`TraceError::Unbounded`] instead of
//!    hanging the host.
//!
//! ## Modules
//!
//! - `core`: coordinates, colors, cells, grid snapshots, configuration, errors
//! - `trace`: color mixing, reflection tables, the tracer and surveys
//! - `record`: move records and the move log the host persists
//! - `generate`: seeded random boards

pub mod core;
pub mod generate;
pub mod record;
pub mod trace;

// Re-export commonly used types
pub use crate::core::{
    BoundaryLabel, Cell, CellRecord, ColorCode, Coord, Direction, EntryPoint, Grid, GridConfig,
    MixedColor, Orientation, Result, Side, TraceError,
};

pub use crate::trace::{
    mix, trace, CanonicalTable, MirroredTable, PathStep, RayTracer, Reflector, StopReason, Survey,
    TraceOutcome, TraceResult,
};

pub use crate::record::{MoveLog, MoveRecord};

pub use crate::generate::{GeneratorConfig, PuzzleGenerator};
