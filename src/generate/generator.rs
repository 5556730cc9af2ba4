//! Random board generation.
//!
//! Uses ChaCha8 seeded from a `u64`, so a seed always produces the same
//! board:
//!
//! ```
//! use mina_ray::core::GridConfig;
//! use mina_ray::generate::{GeneratorConfig, PuzzleGenerator};
//!
//! let config = GeneratorConfig::default();
//! let a = PuzzleGenerator::new(7).generate(&GridConfig::default(), &config).unwrap();
//! let b = PuzzleGenerator::new(7).generate(&GridConfig::default(), &config).unwrap();
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Cell, ColorCode, Coord, Grid, GridConfig, Orientation, Result, TraceError};

const MIRRORS: [Orientation; 4] = [
    Orientation::LeftUp,
    Orientation::RightUp,
    Orientation::LeftDown,
    Orientation::RightDown,
];

const PRIMARIES: [ColorCode; 3] = [ColorCode::Red, ColorCode::Blue, ColorCode::Yellow];

/// How many of each kind of cell to place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Painted, straight-through cells.
    pub colored: usize,

    /// Unpainted mirrors.
    pub mirrors: usize,

    /// Stop cells, painted or not.
    pub stops: usize,

    /// Black cells.
    pub blacks: usize,

    /// Chance that a painted cell is white rather than a primary.
    pub white_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            colored: 8,
            mirrors: 6,
            stops: 2,
            blacks: 2,
            white_probability: 0.2,
        }
    }
}

impl GeneratorConfig {
    /// A board with nothing on it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colored: 0,
            mirrors: 0,
            stops: 0,
            blacks: 0,
            white_probability: 0.0,
        }
    }

    #[must_use]
    pub fn with_colored(mut self, count: usize) -> Self {
        self.colored = count;
        self
    }

    #[must_use]
    pub fn with_mirrors(mut self, count: usize) -> Self {
        self.mirrors = count;
        self
    }

    #[must_use]
    pub fn with_stops(mut self, count: usize) -> Self {
        self.stops = count;
        self
    }

    #[must_use]
    pub fn with_blacks(mut self, count: usize) -> Self {
        self.blacks = count;
        self
    }

    #[must_use]
    pub fn with_white_probability(mut self, p: f64) -> Self {
        self.white_probability = p;
        self
    }

    /// Total cells placed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.colored + self.mirrors + self.stops + self.blacks
    }
}

/// Deterministic board generator.
#[derive(Clone, Debug)]
pub struct PuzzleGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl PuzzleGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Place the requested cells at distinct random coordinates.
    ///
    /// Successive calls on one generator produce different boards.
    pub fn generate(&mut self, grid: &GridConfig, config: &GeneratorConfig) -> Result<Grid> {
        grid.validate()?;
        if config.total() > grid.cell_count() {
            return Err(TraceError::InvalidConfig(format!(
                "{} cells requested on a board of {}",
                config.total(),
                grid.cell_count()
            )));
        }
        if !(0.0..=1.0).contains(&config.white_probability) {
            return Err(TraceError::InvalidConfig(format!(
                "white probability {} outside [0, 1]",
                config.white_probability
            )));
        }

        let mut coords: Vec<Coord> = (0..grid.rows)
            .flat_map(|row| (0..grid.cols).map(move |col| Coord::new(row, col)))
            .collect();
        coords.shuffle(&mut self.rng);

        let white = config.white_probability;
        let mut cells = Vec::with_capacity(config.total());
        cells.extend(std::iter::repeat(Cell::painted(ColorCode::Black)).take(config.blacks));
        for _ in 0..config.colored {
            cells.push(Cell::painted(paint(&mut self.rng, white)));
        }
        for _ in 0..config.mirrors {
            let mirror = MIRRORS[self.rng.gen_range(0..MIRRORS.len())];
            cells.push(Cell::mirror(mirror));
        }
        for _ in 0..config.stops {
            let color = if self.rng.gen_bool(0.5) {
                paint(&mut self.rng, white)
            } else {
                ColorCode::Transparent
            };
            cells.push(Cell::new(color, Orientation::Stop));
        }

        let mut board = Grid::new(grid.clone());
        for (coord, cell) in coords.into_iter().zip(cells) {
            board.insert(coord, cell)?;
        }

        debug!(seed = self.seed, cells = board.len(), "generated board");
        Ok(board)
    }
}

fn paint(rng: &mut ChaCha8Rng, white_probability: f64) -> ColorCode {
    if rng.gen_bool(white_probability) {
        ColorCode::White
    } else {
        PRIMARIES[rng.gen_range(0..PRIMARIES.len())]
    }
}
