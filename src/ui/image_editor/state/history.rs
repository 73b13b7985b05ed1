// SPDX-License-Identifier: MPL-2.0
//! Undo/redo over transform snapshots.

use crate::ui::image_editor::State;

impl State {
    /// Records the live transform as a new history entry.
    pub(crate) fn commit(&mut self) {
        self.history.push(self.transform);
    }

    /// Commits only when the live transform differs from the entry under the
    /// cursor (slider releases without movement).
    pub(crate) fn commit_if_changed(&mut self) {
        let unchanged = self
            .history
            .current()
            .is_some_and(|entry| entry.snapshot == self.transform);
        if !unchanged && self.is_ready() {
            self.commit();
        }
    }

    pub fn undo(&mut self) {
        if !self.is_ready() {
            return;
        }
        if let Some(snapshot) = self.history.undo() {
            self.transform = snapshot;
        }
    }

    pub fn redo(&mut self) {
        if !self.is_ready() {
            return;
        }
        if let Some(snapshot) = self.history.redo() {
            self.transform = snapshot;
        }
    }
}
