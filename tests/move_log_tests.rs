//! Move log integration tests.

use mina_ray::core::{BoundaryLabel, Cell, ColorCode, Coord, Grid, MixedColor, Orientation, Side};
use mina_ray::record::{MoveLog, MoveRecord};
use mina_ray::trace::RayTracer;

fn puzzle() -> Grid {
    Grid::default()
        .with_cell(Coord::new(2, 3), Cell::painted(ColorCode::Red))
        .and_then(|g| g.with_cell(Coord::new(5, 3), Cell::painted(ColorCode::White)))
        .and_then(|g| g.with_cell(Coord::new(4, 7), Cell::painted(ColorCode::Black)))
        .and_then(|g| g.with_cell(Coord::new(6, 0), Cell::mirror(Orientation::Stop)))
        .unwrap()
}

// =============================================================================
// Recording Moves
// =============================================================================

/// A session of moves is logged in order with its outcomes.
#[test]
fn test_session_log() {
    let grid = puzzle();
    let tracer = RayTracer::new();
    let mut log = MoveLog::new();

    for (side, index) in [(Side::Top, 3), (Side::Left, 4), (Side::Right, 6), (Side::Top, 3)] {
        log.record(&tracer.trace(&grid, side, index).unwrap());
    }

    assert_eq!(log.len(), 4);

    let lines: Vec<String> = log.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec![
        "T4 -> B4 LIGHT_RED",
        "L5 -> - ABSORBED",
        "R7 -> - TRANSPARENT",
        "T4 -> B4 LIGHT_RED",
    ]);

    let top = BoundaryLabel::new(Side::Top, 3);
    assert_eq!(log.records_for_entry(top).count(), 2);
    assert_eq!(
        log.last(),
        Some(&MoveRecord::new(top, Some(BoundaryLabel::new(Side::Bottom, 3)), MixedColor::LightRed))
    );
}

/// The log survives a binary round trip.
#[test]
fn test_log_persistence() {
    let grid = puzzle();
    let survey = RayTracer::new().survey(&grid).unwrap();
    let log: MoveLog = survey.records().collect();

    let bytes = log.to_bytes().unwrap();
    let restored = MoveLog::from_bytes(&bytes).unwrap();

    assert_eq!(restored, log);
    assert_eq!(restored.len(), 36);
}

/// Cloned logs are independent.
#[test]
fn test_log_snapshots() {
    let mut log = MoveLog::new();
    log.push(MoveRecord::new(BoundaryLabel::new(Side::Left, 0), None, MixedColor::Absorbed));

    let snapshot = log.clone();
    log.push(MoveRecord::new(
        BoundaryLabel::new(Side::Left, 1),
        Some(BoundaryLabel::new(Side::Right, 1)),
        MixedColor::Transparent,
    ));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(log.len(), 2);
}
