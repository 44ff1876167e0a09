//! Cycle cursor.
//!
//! Holds the decoded snapshot sequence and the index of the next snapshot to hand out.
//! Invariant: `0 <= position <= len`. At `position == len` the cursor is exhausted;
//! what happens next is the session's decision, not the cursor's.

use crate::trace::snapshot::CycleSnapshot;

/// Ordered snapshot sequence with an explicit position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    snapshots: Vec<CycleSnapshot>,
}

impl Cursor {
    /// Creates an empty (and therefore exhausted) cursor.
    pub const fn new() -> Self {
        Self {
            position: 0,
            snapshots: Vec::new(),
        }
    }

    /// Replaces the whole sequence and rewinds to the start.
    pub fn load(&mut self, snapshots: Vec<CycleSnapshot>) {
        self.snapshots = snapshots;
        self.position = 0;
    }

    /// Drops the sequence and rewinds.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.position = 0;
    }

    /// Returns the snapshot at the current position and moves past it.
    ///
    /// # Returns
    ///
    /// `None` once the cursor is exhausted; the position never passes the end.
    pub fn advance(&mut self) -> Option<&CycleSnapshot> {
        let snapshot = self.snapshots.get(self.position)?;
        self.position += 1;
        Some(snapshot)
    }

    /// Returns `true` when every snapshot has been handed out (including an empty sequence).
    pub fn is_exhausted(&self) -> bool {
        self.position == self.snapshots.len()
    }

    /// Index of the next snapshot to hand out.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of snapshots in the sequence.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshots not yet handed out.
    pub fn remaining(&self) -> usize {
        self.snapshots.len() - self.position
    }

    /// The whole sequence.
    pub fn snapshots(&self) -> &[CycleSnapshot] {
        &self.snapshots
    }
}
