//! Undo/redo history of document snapshots
//!
//! The editor records a snapshot after every edit. The history is a bounded
//! sequence with a cursor: pushing while the cursor is behind the newest
//! snapshot discards the redo branch, and once the capacity is exceeded the
//! oldest snapshot is dropped.

use std::collections::VecDeque;

/// Snapshots kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct History<T> {
    states: VecDeque<T>,
    cursor: Option<usize>,
    capacity: usize,
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a history holding at most `capacity` snapshots (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: VecDeque::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a new snapshot after the current one
    pub fn push(&mut self, state: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.states.truncate(keep);
        self.states.push_back(state);
        if self.states.len() > self.capacity {
            self.states.pop_front();
        }
        self.cursor = Some(self.states.len() - 1);
    }

    /// Step back one snapshot and return it
    pub fn undo(&mut self) -> Option<T> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.states.get(c - 1).cloned()
            }
            _ => None,
        }
    }

    /// Step forward one snapshot and return it
    pub fn redo(&mut self) -> Option<T> {
        let next = self.cursor?.checked_add(1)?;
        let state = self.states.get(next)?.clone();
        self.cursor = Some(next);
        Some(state)
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.states.len()
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> Option<&T> {
        self.states.get(self.cursor?)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
