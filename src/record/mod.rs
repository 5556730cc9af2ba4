//! Move records: what the host keeps from each ray.
//!
//! A move is the triple `(entry, exit, final color)`. The log is an
//! append-only `im::Vector`, cheap to clone alongside grid snapshots.

pub mod log;

pub use log::{MoveLog, MoveRecord};
