//! Ray simulation.
//!
//! - `mixing`: how paints combine into the color a ray carries
//! - `reflection`: how mirrors turn rays
//! - `tracer`: the step-by-step simulation
//! - `result`: what a finished trace reports
//! - `survey`: tracing every entry point of a board
//!
//! ## Usage
//!
//! ```
//! use mina_ray::core::{Cell, ColorCode, Coord, Grid, MixedColor, Side};
//! use mina_ray::trace::RayTracer;
//!
//! let grid = Grid::default()
//!     .with_cell(Coord::new(1, 2), Cell::painted(ColorCode::Red))
//!     .unwrap()
//!     .with_cell(Coord::new(1, 5), Cell::painted(ColorCode::Yellow))
//!     .unwrap();
//!
//! let tracer = RayTracer::new();
//! let result = tracer.trace(&grid, Side::Left, 1).unwrap();
//!
//! assert_eq!(result.final_color, MixedColor::Green);
//! assert_eq!(result.exit_label_text(), "R2");
//! ```

pub mod mixing;
pub mod reflection;
pub mod result;
pub mod survey;
pub mod tracer;

pub use mixing::mix;
pub use reflection::{CanonicalTable, MirroredTable, Reflector};
pub use result::{PathStep, StopReason, TraceOutcome, TraceResult};
pub use survey::Survey;
pub use tracer::{trace, RayTracer};
