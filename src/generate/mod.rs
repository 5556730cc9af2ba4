//! Seeded random boards for authoring, fuzzing and benchmarks.

pub mod generator;

pub use generator::{GeneratorConfig, PuzzleGenerator};
