//! Mirror reflection tables.
//!
//! Each mirror orientation names a pair of directions. A [`Reflector`]
//! decides which incoming headings that pair turns and where they go;
//! anything it does not turn stops the ray at the mirror.
//!
//! Two tables exist for the same orientation codes:
//! - [`CanonicalTable`]: the pair is the set of incoming headings, swapped.
//!   Code 2 (left/up) turns a ray heading left to up and heading up to left.
//! - [`MirroredTable`]: the pair names the faces of the cell instead, so the
//!   incoming headings are the opposites. Code 2 turns a ray heading right
//!   to down and heading down to right.

use crate::core::{Direction, Orientation};

/// Policy for turning rays at mirror cells.
pub trait Reflector: Send + Sync {
    /// New heading for a ray arriving at a mirror.
    ///
    /// Only called for mirror orientations. `None` stops the ray.
    fn reflect(&self, orientation: Orientation, incoming: Direction) -> Option<Direction>;
}

fn swap_within(pair: (Direction, Direction), incoming: Direction) -> Option<Direction> {
    let (a, b) = pair;
    if incoming == a {
        Some(b)
    } else if incoming == b {
        Some(a)
    } else {
        None
    }
}

/// The default table: an orientation turns the two headings it names into
/// each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalTable;

impl Reflector for CanonicalTable {
    fn reflect(&self, orientation: Orientation, incoming: Direction) -> Option<Direction> {
        swap_within(orientation.mirror_pair()?, incoming)
    }
}

/// The alternate table: an orientation turns the opposites of the headings
/// it names.
#[derive(Clone, Copy, Debug, Default)]
pub struct MirroredTable;

impl Reflector for MirroredTable {
    fn reflect(&self, orientation: Orientation, incoming: Direction) -> Option<Direction> {
        let (a, b) = orientation.mirror_pair()?;
        swap_within((a.opposite(), b.opposite()), incoming)
    }
}
