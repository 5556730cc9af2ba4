//! Results for every entry point of a board.

use rustc_hash::FxHashMap;

use crate::core::{BoundaryLabel, EntryPoint, MixedColor};
use crate::record::MoveRecord;

use super::result::TraceResult;

/// Every entry point of a board with its trace, in survey order
/// (top, right, bottom, left).
#[derive(Clone, Debug)]
pub struct Survey {
    results: Vec<(EntryPoint, TraceResult)>,
    by_entry: FxHashMap<BoundaryLabel, usize>,
}

impl Survey {
    pub(crate) fn new(results: Vec<(EntryPoint, TraceResult)>) -> Self {
        let by_entry = results
            .iter()
            .enumerate()
            .map(|(i, (entry, _))| (entry.label(), i))
            .collect();
        Self { results, by_entry }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result for the ray entering at `label`.
    #[must_use]
    pub fn get(&self, label: BoundaryLabel) -> Option<&TraceResult> {
        self.by_entry.get(&label).map(|&i| &self.results[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryPoint, &TraceResult)> {
        self.results.iter().map(|(entry, result)| (*entry, result))
    }

    /// Number of rays that ended on a black cell.
    #[must_use]
    pub fn absorbed_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_absorbed()).count()
    }

    /// Entry points whose ray left the board with `color`.
    pub fn exiting_with(&self, color: MixedColor) -> impl Iterator<Item = EntryPoint> + '_ {
        self.results
            .iter()
            .filter(move |(_, r)| r.exit_label().is_some() && r.final_color == color)
            .map(|(entry, _)| *entry)
    }

    /// The answer sheet: one move record per entry point.
    pub fn records(&self) -> impl Iterator<Item = MoveRecord> + '_ {
        self.results.iter().map(|(_, r)| MoveRecord::from_trace(r))
    }
}
