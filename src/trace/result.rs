//! Trace output.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoundaryLabel, Cell, ColorCode, Coord, Direction, MixedColor};

/// One cell with an entry that the ray passed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub coord: Coord,

    /// Color accumulated up to and including this cell.
    pub color: MixedColor,

    /// The cell as stored in the grid.
    pub cell: Cell,
}

/// Why a ray stopped inside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Orientation code 1.
    StopCell,
    /// A mirror that does not turn rays arriving with this heading.
    Unreflected(Direction),
}

/// Terminal state of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceOutcome {
    /// Hit a black cell.
    Absorbed { at: Coord },
    /// Halted on a stop cell or an unhandled mirror.
    Stopped { at: Coord, reason: StopReason },
    /// Left the board.
    Exited { exit: BoundaryLabel },
}

/// Everything observed about one ray.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceResult {
    /// Where the ray entered.
    pub entry: BoundaryLabel,

    /// Cells with an entry, in visiting order. Transparent coordinates
    /// are walked but not recorded.
    pub path: Vec<PathStep>,

    /// Paint of every non-transparent cell on the path, in order.
    pub encountered_colors: SmallVec<[ColorCode; 8]>,

    /// Color the ray ended with.
    pub final_color: MixedColor,

    pub outcome: TraceOutcome,

    /// In-board coordinates walked, transparent ones included.
    pub steps: u32,
}

impl TraceResult {
    /// Where the ray left the board; `None` when absorbed or stopped.
    #[must_use]
    pub fn exit_label(&self) -> Option<BoundaryLabel> {
        match self.outcome {
            TraceOutcome::Exited { exit } => Some(exit),
            _ => None,
        }
    }

    /// The exit label as text, empty when the ray did not leave the board.
    #[must_use]
    pub fn exit_label_text(&self) -> String {
        self.exit_label().map(|l| l.to_string()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_absorbed(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Absorbed { .. })
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Stopped { .. })
    }

    /// Did the ray leave through the position it entered by?
    #[must_use]
    pub fn returned_to_entry(&self) -> bool {
        self.exit_label() == Some(self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    fn result(outcome: TraceOutcome) -> TraceResult {
        TraceResult {
            entry: BoundaryLabel::new(Side::Top, 3),
            path: Vec::new(),
            encountered_colors: SmallVec::new(),
            final_color: MixedColor::Transparent,
            outcome,
            steps: 8,
        }
    }

    #[test]
    fn test_exit_label() {
        let exited = result(TraceOutcome::Exited {
            exit: BoundaryLabel::new(Side::Bottom, 3),
        });
        assert_eq!(exited.exit_label(), Some(BoundaryLabel::new(Side::Bottom, 3)));
        assert_eq!(exited.exit_label_text(), "B4");
        assert!(!exited.returned_to_entry());

        let stopped = result(TraceOutcome::Stopped {
            at: Coord::new(0, 3),
            reason: StopReason::StopCell,
        });
        assert_eq!(stopped.exit_label(), None);
        assert_eq!(stopped.exit_label_text(), "");
        assert!(stopped.is_stopped());
        assert!(!stopped.is_absorbed());
    }

    #[test]
    fn test_returned_to_entry() {
        let back = result(TraceOutcome::Exited {
            exit: BoundaryLabel::new(Side::Top, 3),
        });
        assert!(back.returned_to_entry());
    }

    #[test]
    fn test_serialization() {
        let r = result(TraceOutcome::Absorbed { at: Coord::new(4, 3) });
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: TraceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
