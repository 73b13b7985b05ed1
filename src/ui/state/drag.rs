// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the image on the canvas.

use crate::domain::editing::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position where the drag started
    pub start_position: Option<Point>,

    /// Image position when the drag started
    pub start_offset: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation, returning whether one was active
    pub fn stop(&mut self) -> bool {
        let was_dragging = self.is_dragging;
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
        was_dragging
    }

    /// Image position that follows the cursor: start offset plus pointer delta
    #[must_use]
    pub fn calculate_position(&self, current_position: Point) -> Option<Point> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;
        let (dx, dy) = current_position.delta_from(start_pos);
        Some(start_offset.translated(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn stop_reports_whether_a_drag_was_active() {
        let mut state = DragState::default();
        assert!(!state.stop());

        state.start(Point::new(100.0, 50.0), Point::new(20.0, 10.0));
        assert!(state.stop());
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
    }

    #[test]
    fn calculate_position_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_position(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn position_follows_pointer_delta_without_clamping() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Point::new(50.0, 30.0));

        let moved = state.calculate_position(Point::new(120.0, 100.0));
        assert_eq!(moved, Some(Point::new(-30.0, -20.0)));
    }
}
