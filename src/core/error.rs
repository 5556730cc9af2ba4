//! Error type shared by grid construction and tracing.
//!
//! Two families of failure exist:
//! - configuration errors: bad entry indices, unknown cell codes, cells off
//!   the board. Puzzle data is rejected, never patched up.
//! - unbounded traces: a ray that keeps moving past the step limit or
//!   revisits a cell with the same heading.
//!
//! Absorption and leaving the board are ordinary trace outcomes, not errors.

use super::direction::{BoundaryLabel, Side};

/// Errors returned by this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("entry index {index} out of range for {side} side (length {len})")]
    InvalidEntry { side: Side, index: usize, len: usize },

    #[error("unrecognized color code {0:?}")]
    InvalidColor(String),

    #[error("unrecognized orientation code {0}")]
    InvalidOrientation(i64),

    #[error("cell at col {col}, row {row} lies outside the {rows}x{cols} board")]
    CellOutOfBounds { col: i64, row: i64, rows: u8, cols: u8 },

    #[error("more than one cell at col {col}, row {row}")]
    DuplicateCell { col: u8, row: u8 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ray entering at {entry} still travelling after {steps} steps")]
    Unbounded { entry: BoundaryLabel, steps: u32 },

    #[error("move log codec: {0}")]
    Codec(String),
}

impl TraceError {
    /// True for errors caused by bad puzzle or caller input.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, TraceError::Unbounded { .. } | TraceError::Codec(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TraceError>;
