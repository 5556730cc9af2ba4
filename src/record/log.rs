//! Move records and the move log.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoundaryLabel, MixedColor, Result, TraceError};
use crate::trace::TraceResult;

/// Observable outcome of one ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Where the ray entered.
    pub entry: BoundaryLabel,

    /// Where it left; `None` when absorbed or stopped.
    pub exit: Option<BoundaryLabel>,

    pub final_color: MixedColor,
}

impl MoveRecord {
    #[must_use]
    pub fn new(entry: BoundaryLabel, exit: Option<BoundaryLabel>, final_color: MixedColor) -> Self {
        Self {
            entry,
            exit,
            final_color,
        }
    }

    /// Record the observable part of a trace.
    #[must_use]
    pub fn from_trace(result: &TraceResult) -> Self {
        Self::new(result.entry, result.exit_label(), result.final_color)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exit {
            Some(exit) => write!(f, "{} -> {} {}", self.entry, exit, self.final_color),
            None => write!(f, "{} -> - {}", self.entry, self.final_color),
        }
    }
}

/// Ordered history of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vector<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Append the outcome of a trace.
    pub fn record(&mut self, result: &TraceResult) {
        self.push(MoveRecord::from_trace(result));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Moves that entered at `entry`, oldest first.
    pub fn records_for_entry(&self, entry: BoundaryLabel) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter().filter(move |r| r.entry == entry)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(&self.records).map_err(|e| TraceError::Codec(e.to_string()))
    }

    /// Decode a log written by [`MoveLog::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let records = bincode::deserialize(bytes).map_err(|e| TraceError::Codec(e.to_string()))?;
        Ok(Self { records })
    }
}

impl Extend<MoveRecord> for MoveLog {
    fn extend<T: IntoIterator<Item = MoveRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<MoveRecord> for MoveLog {
    fn from_iter<T: IntoIterator<Item = MoveRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    fn top(i: u8) -> BoundaryLabel {
        BoundaryLabel::new(Side::Top, i)
    }

    fn bottom(i: u8) -> BoundaryLabel {
        BoundaryLabel::new(Side::Bottom, i)
    }

    #[test]
    fn test_push_and_query() {
        let mut log = MoveLog::new();
        assert!(log.is_empty());

        log.push(MoveRecord::new(top(0), Some(bottom(0)), MixedColor::Red));
        log.push(MoveRecord::new(top(1), None, MixedColor::Absorbed));
        log.push(MoveRecord::new(top(0), Some(bottom(0)), MixedColor::Red));

        assert_eq!(log.len(), 3);
        assert_eq!(log.records_for_entry(top(0)).count(), 2);
        assert_eq!(log.records_for_entry(top(5)).count(), 0);
        assert_eq!(log.last().unwrap().final_color, MixedColor::Red);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = MoveLog::new();
        log.push(MoveRecord::new(top(0), None, MixedColor::Absorbed));

        let snapshot = log.clone();
        log.push(MoveRecord::new(top(1), Some(bottom(1)), MixedColor::Transparent));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_display() {
        let hit = MoveRecord::new(top(3), Some(bottom(3)), MixedColor::LightGreen);
        assert_eq!(hit.to_string(), "T4 -> B4 LIGHT_GREEN");

        let absorbed = MoveRecord::new(top(3), None, MixedColor::Absorbed);
        assert_eq!(absorbed.to_string(), "T4 -> - ABSORBED");
    }

    #[test]
    fn test_bytes_round_trip() {
        let log: MoveLog = [
            MoveRecord::new(top(2), Some(bottom(2)), MixedColor::Orange),
            MoveRecord::new(BoundaryLabel::new(Side::Left, 7), None, MixedColor::LightBlue),
        ]
        .into_iter()
        .collect();

        let bytes = log.to_bytes().unwrap();
        assert_eq!(MoveLog::from_bytes(&bytes).unwrap(), log);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = MoveLog::from_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 9]).unwrap_err();
        assert!(matches!(err, TraceError::Codec(_)));
    }

    #[test]
    fn test_json_shape() {
        let record = MoveRecord::new(top(0), None, MixedColor::Absorbed);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"entry":{"side":"top","index":0},"exit":null,"final_color":"ABSORBED"}"#
        );
    }
}
