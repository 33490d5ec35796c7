//! Bounded undo history of selections.

use std::collections::VecDeque;

use super::set::SelectionSet;

/// Number of snapshots kept by [`SelectionHistory::new`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 101;

/// A bounded stack of earlier selections.
///
/// Pushing past capacity evicts the oldest snapshot first. Popping returns the
/// most recent one, or `None` when there is nothing left to undo.
#[derive(Debug, Clone)]
pub struct SelectionHistory {
    entries: VecDeque<SelectionSet>,
    capacity: usize,
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionHistory {
    /// Create a history holding up to [`DEFAULT_HISTORY_CAPACITY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history holding up to `capacity` snapshots.
    ///
    /// A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Maximum number of snapshots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of snapshots currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is nothing to undo.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a snapshot, evicting the oldest ones if over capacity.
    pub fn push(&mut self, selection: SelectionSet) {
        self.entries.push_back(selection);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<SelectionSet> {
        self.entries.pop_back()
    }

    /// The most recent snapshot, without removing it.
    pub fn peek(&self) -> Option<&SelectionSet> {
        self.entries.back()
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
