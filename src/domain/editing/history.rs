// SPDX-License-Identifier: MPL-2.0
//! Bounded linear undo/redo log of snapshots.
//!
//! The cursor points at the entry that matches the live state. Pushing after
//! an undo drops every entry past the cursor; pushing beyond capacity evicts
//! the oldest entry.

use std::collections::VecDeque;
use std::time::SystemTime;

/// An immutable snapshot plus the time it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<T> {
    pub snapshot: T,
    pub recorded_at: SystemTime,
}

#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    entries: VecDeque<HistoryEntry<T>>,
    /// `None` only while the stack is empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl<T: Clone> HistoryStack<T> {
    /// Creates an empty stack. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Records a new snapshot at the cursor.
    pub fn push(&mut self, snapshot: T) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push_back(HistoryEntry {
            snapshot,
            recorded_at: SystemTime::now(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one entry and returns the snapshot to apply.
    pub fn undo(&mut self) -> Option<T> {
        let cursor = self.cursor.filter(|c| *c > 0)?;
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1).map(|e| e.snapshot.clone())
    }

    /// Steps forward one entry and returns the snapshot to apply.
    pub fn redo(&mut self) -> Option<T> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1).map(|e| e.snapshot.clone())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry<T>> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, `None` when empty.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry<T>> {
        self.entries.iter()
    }
}
