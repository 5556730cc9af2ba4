//! The ray tracer.
//!
//! A ray is a small state machine:
//!
//! ```text
//! Traveling --black paint------------------> Absorbed
//! Traveling --stop cell / unturned mirror--> Stopped
//! Traveling --step off the board-----------> Exited
//! Traveling --transparent / turned---------> Traveling
//! ```
//!
//! Each call to [`RayTracer::trace`] builds its own accumulator and reads the
//! grid without modifying it, so one tracer can serve any number of grids
//! and threads.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{
    BoundaryLabel, ColorCode, Coord, Direction, EntryPoint, Grid, MixedColor, Orientation, Result,
    Side, TraceError,
};

use super::mixing::mix;
use super::reflection::{CanonicalTable, Reflector};
use super::result::{PathStep, StopReason, TraceOutcome, TraceResult};
use super::survey::Survey;

/// State of a ray between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RayState {
    Traveling { at: Coord, heading: Direction },
    Finished(TraceOutcome),
}

/// Data gathered while a ray travels.
struct Ray {
    entry: BoundaryLabel,
    path: Vec<PathStep>,
    colors: SmallVec<[ColorCode; 8]>,
    color: MixedColor,
    steps: u32,
}

impl Ray {
    fn new(entry: BoundaryLabel) -> Self {
        Self {
            entry,
            path: Vec::new(),
            colors: SmallVec::new(),
            color: MixedColor::Transparent,
            steps: 0,
        }
    }

    fn finish(self, outcome: TraceOutcome) -> TraceResult {
        TraceResult {
            entry: self.entry,
            path: self.path,
            encountered_colors: self.colors,
            final_color: self.color,
            outcome,
            steps: self.steps,
        }
    }
}

/// Simulates rays on a grid.
///
/// Uses [`CanonicalTable`] for mirrors unless another [`Reflector`] is set.
pub struct RayTracer {
    reflector: Box<dyn Reflector>,
}

impl Default for RayTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RayTracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayTracer").finish_non_exhaustive()
    }
}

impl RayTracer {
    /// Create a tracer with the canonical reflection table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reflector: Box::new(CanonicalTable),
        }
    }

    /// Set a custom reflection table.
    #[must_use]
    pub fn with_reflector<R: Reflector + 'static>(mut self, reflector: R) -> Self {
        self.reflector = Box::new(reflector);
        self
    }

    /// Trace a ray entering through `side` at `index`.
    ///
    /// `index` counts columns on the top and bottom sides and rows on the
    /// left and right, starting at 0.
    pub fn trace(&self, grid: &Grid, side: Side, index: usize) -> Result<TraceResult> {
        let entry = EntryPoint::new(side, index, grid.config())?;
        self.trace_from(grid, entry)
    }

    /// Trace a ray from an entry point.
    ///
    /// Fails with [`TraceError::Unbounded`] when the ray exceeds the grid's
    /// step limit or, with cycle detection on, revisits a cell with the same
    /// heading.
    pub fn trace_from(&self, grid: &Grid, entry: EntryPoint) -> Result<TraceResult> {
        let config = grid.config();
        config.validate()?;
        // the entry point may come from another board
        let entry = EntryPoint::from_label(entry.label(), config)?;

        debug!(entry = %entry, "tracing ray");

        let mut ray = Ray::new(entry.label());
        let mut seen: FxHashSet<(Coord, Direction)> = FxHashSet::default();
        let mut state = RayState::Traveling {
            at: entry.first_cell(config),
            heading: entry.direction(),
        };

        loop {
            match state {
                RayState::Traveling { at, heading } => {
                    let revisited = config.detect_cycles && !seen.insert((at, heading));
                    if revisited || ray.steps >= config.max_steps {
                        warn!(entry = %entry, steps = ray.steps, revisited, "unbounded ray");
                        return Err(TraceError::Unbounded {
                            entry: entry.label(),
                            steps: ray.steps,
                        });
                    }
                    state = self.advance(grid, &mut ray, at, heading);
                }
                RayState::Finished(outcome) => {
                    debug!(
                        entry = %entry,
                        outcome = ?outcome,
                        final_color = %ray.color,
                        steps = ray.steps,
                        "ray finished"
                    );
                    return Ok(ray.finish(outcome));
                }
            }
        }
    }

    /// Trace every entry point of the grid.
    pub fn survey(&self, grid: &Grid) -> Result<Survey> {
        EntryPoint::all(grid.config())
            .map(|entry| self.trace_from(grid, entry).map(|result| (entry, result)))
            .collect::<Result<Vec<_>>>()
            .map(Survey::new)
    }

    /// Process the cell at `at` and pick the next state.
    fn advance(&self, grid: &Grid, ray: &mut Ray, at: Coord, heading: Direction) -> RayState {
        ray.steps += 1;
        trace!(row = at.row, col = at.col, heading = ?heading, "ray step");

        let Some(&cell) = grid.get(at) else {
            return Self::proceed(grid, at, heading);
        };

        if !cell.color.is_transparent() {
            ray.colors.push(cell.color);
            ray.color = mix(&ray.colors);
        }

        ray.path.push(PathStep {
            coord: at,
            color: ray.color,
            cell,
        });

        if ray.color == MixedColor::Absorbed {
            return RayState::Finished(TraceOutcome::Absorbed { at });
        }

        match cell.orientation {
            Orientation::Straight => Self::proceed(grid, at, heading),
            Orientation::Stop => RayState::Finished(TraceOutcome::Stopped {
                at,
                reason: StopReason::StopCell,
            }),
            mirror => match self.reflector.reflect(mirror, heading) {
                Some(turned) => Self::proceed(grid, at, turned),
                None => RayState::Finished(TraceOutcome::Stopped {
                    at,
                    reason: StopReason::Unreflected(heading),
                }),
            },
        }
    }

    fn proceed(grid: &Grid, at: Coord, heading: Direction) -> RayState {
        match at.step(heading, grid.rows(), grid.cols()) {
            Some(next) => RayState::Traveling { at: next, heading },
            None => RayState::Finished(TraceOutcome::Exited {
                exit: BoundaryLabel::leaving(at, heading),
            }),
        }
    }
}

/// Trace one ray with the canonical reflection table.
///
/// ```
/// use mina_ray::core::{Cell, ColorCode, Coord, Grid, MixedColor, Side};
/// use mina_ray::trace::trace;
///
/// let grid = Grid::default()
///     .with_cell(Coord::new(2, 3), Cell::painted(ColorCode::Red))
///     .unwrap();
///
/// let result = trace(&grid, Side::Top, 3).unwrap();
/// assert_eq!(result.final_color, MixedColor::Red);
/// assert_eq!(result.exit_label_text(), "B4");
/// ```
pub fn trace(grid: &Grid, side: Side, index: usize) -> Result<TraceResult> {
    RayTracer::new().trace(grid, side, index)
}
