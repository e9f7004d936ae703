//! This module contains the [AssignmentLog], an observational record of the
//! solving process intended for visualization frontends.
//!
//! Whenever a cell's candidate set first shrinks to a single digit, whether
//! by propagation or by a search branch forcing a digit, the log stores a
//! full snapshot of all 81 candidate sets at that moment. Replaying the
//! snapshots in order animates the solve.
//!
//! The log is an explicit value injected into the solver rather than ambient
//! global state, so solving stays testable in isolation. A
//! [disabled](AssignmentLog::disabled) log records nothing and costs nothing;
//! the absence of a consumer never affects solving.

use crate::SIZE;
use crate::util::DigitSet;

use std::sync::{Arc, Mutex};

/// A copy of all 81 candidate sets, taken at the moment some cell was
/// resolved to a single digit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridSnapshot {
    cells: Vec<DigitSet>
}

impl GridSnapshot {

    /// Gets the candidate set recorded for the cell at the specified
    /// position. Out-of-bounds coordinates panic; snapshots are a debugging
    /// aid, not a validated API surface.
    pub fn candidates(&self, column: usize, row: usize) -> DigitSet {
        self.cells[crate::index(column, row)]
    }

    /// The number of cells in this snapshot that were resolved to a single
    /// digit at the time it was taken.
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|c| c.len() == 1).count()
    }
}

/// An append-only log of [GridSnapshot]s, shared by all clones of one handle.
///
/// Clones of an `AssignmentLog` refer to the same underlying record. The
/// solver clones its candidate grid, and with it the log handle, for every
/// search branch, so assignments from all branches end up in one
/// chronological sequence. Appends are mutually exclusive, which keeps the
/// record well-formed even if branches are explored from multiple threads.
#[derive(Clone)]
pub struct AssignmentLog {
    sink: Option<Arc<Mutex<Vec<GridSnapshot>>>>
}

impl AssignmentLog {

    /// Creates a log that discards everything. All recording operations are
    /// no-ops.
    pub fn disabled() -> AssignmentLog {
        AssignmentLog {
            sink: None
        }
    }

    /// Creates a log that records a snapshot for every assignment.
    pub fn recording() -> AssignmentLog {
        AssignmentLog {
            sink: Some(Arc::new(Mutex::new(Vec::new())))
        }
    }

    /// Indicates whether this log actually records snapshots.
    pub fn is_recording(&self) -> bool {
        self.sink.is_some()
    }

    /// Appends a snapshot of the given candidate sets. `cells` must hold one
    /// set per cell in row-major order.
    pub(crate) fn record(&self, cells: &[DigitSet]) {
        if let Some(sink) = &self.sink {
            debug_assert_eq!(SIZE * SIZE, cells.len());
            sink.lock().unwrap().push(GridSnapshot {
                cells: cells.to_vec()
            });
        }
    }

    /// The number of snapshots recorded so far. Always zero for a disabled
    /// log.
    pub fn len(&self) -> usize {
        match &self.sink {
            Some(sink) => sink.lock().unwrap().len(),
            None => 0
        }
    }

    /// Indicates whether no snapshots have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies out all snapshots recorded so far, in the order they were
    /// appended.
    pub fn snapshots(&self) -> Vec<GridSnapshot> {
        match &self.sink {
            Some(sink) => sink.lock().unwrap().clone(),
            None => Vec::new()
        }
    }
}

impl Default for AssignmentLog {
    fn default() -> AssignmentLog {
        AssignmentLog::disabled()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;

    fn sample_cells() -> Vec<DigitSet> {
        let mut cells = vec![DigitSet::full(); SIZE * SIZE];
        cells[0] = DigitSet::singleton(4).unwrap();
        cells
    }

    #[test]
    fn disabled_log_records_nothing() {
        let log = AssignmentLog::disabled();
        log.record(&sample_cells());

        assert!(!log.is_recording());
        assert!(log.is_empty());
        assert!(log.snapshots().is_empty());
    }

    #[test]
    fn recording_log_keeps_snapshots_in_order() {
        let log = AssignmentLog::recording();
        let first = sample_cells();
        let mut second = sample_cells();
        second[1] = DigitSet::singleton(7).unwrap();

        log.record(&first);
        log.record(&second);

        assert!(log.is_recording());
        assert_eq!(2, log.len());

        let snapshots = log.snapshots();
        assert_eq!(digits!(4), snapshots[0].candidates(0, 0));
        assert_eq!(DigitSet::full(), snapshots[0].candidates(1, 0));
        assert_eq!(digits!(7), snapshots[1].candidates(1, 0));
        assert_eq!(1, snapshots[0].solved_count());
        assert_eq!(2, snapshots[1].solved_count());
    }

    #[test]
    fn clones_share_the_same_record() {
        let log = AssignmentLog::recording();
        let clone = log.clone();

        clone.record(&sample_cells());

        assert_eq!(1, log.len());
    }
}
