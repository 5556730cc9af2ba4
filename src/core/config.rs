//! Board configuration.
//!
//! The puzzle board is 8 rows by 10 columns. Other sizes trace with the same
//! rules, so dimensions live in `GridConfig` rather than in constants
//! scattered through the tracer.

use serde::{Deserialize, Serialize};

use super::error::{Result, TraceError};

/// Rows on the standard board.
pub const DEFAULT_ROWS: u8 = 8;

/// Columns on the standard board.
pub const DEFAULT_COLS: u8 = 10;

/// Board dimensions and trace limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (1-255).
    pub rows: u8,

    /// Number of columns (1-255).
    pub cols: u8,

    /// Maximum in-board steps a single trace may take before it is
    /// reported as unbounded. Defaults to `rows * cols * 4`, one visit per
    /// cell and heading.
    pub max_steps: u32,

    /// Reject a trace as soon as it revisits a cell with the same heading,
    /// instead of waiting for `max_steps`.
    pub detect_cycles: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl GridConfig {
    /// Create a configuration for a `rows` x `cols` board.
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(cols > 0, "Board must have at least 1 column");

        Self {
            rows,
            cols,
            max_steps: Self::step_bound(rows, cols),
            detect_cycles: true,
        }
    }

    /// Set the step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Turn cycle detection off; only `max_steps` bounds a trace.
    #[must_use]
    pub fn without_cycle_detection(mut self) -> Self {
        self.detect_cycles = false;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Check a configuration that did not come through `new`
    /// (deserialized, or built by field).
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(TraceError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.max_steps == 0 {
            return Err(TraceError::InvalidConfig("max_steps must be positive".into()));
        }
        Ok(())
    }

    fn step_bound(rows: u8, cols: u8) -> u32 {
        u32::from(rows) * u32::from(cols) * 4
    }
}
