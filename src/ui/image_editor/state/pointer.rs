// SPDX-License-Identifier: MPL-2.0
//! Pointer interaction: pan drags, crop handle drags and wheel zoom.
//!
//! Pan drags commit one history entry on release. Crop box edits never touch
//! history.

use crate::domain::editing::Point;
use crate::ui::image_editor::{CropDrag, State, ToolMode};

/// Browser-style wheel deltas above zero zoom out.
const WHEEL_ZOOM_OUT_THRESHOLD: f32 = 0.0;

impl State {
    pub fn pointer_pressed(&mut self, position: Point) {
        if !self.is_ready() {
            return;
        }
        match self.tool {
            ToolMode::Move => self.drag.start(position, self.transform.position),
            ToolMode::Crop => {
                let tolerance = self.settings.crop_handle_size;
                self.crop_drag = self.crop_box.and_then(|crop| {
                    crop.hit_test(position, tolerance).map(|handle| CropDrag {
                        handle,
                        start: position,
                        start_box: crop,
                    })
                });
            }
        }
    }

    pub fn pointer_moved(&mut self, position: Point) {
        if !self.is_ready() {
            return;
        }
        match self.tool {
            ToolMode::Move => {
                if let Some(next) = self.drag.calculate_position(position) {
                    self.transform.position = next;
                }
            }
            ToolMode::Crop => {
                if let Some(drag) = self.crop_drag {
                    let (dx, dy) = position.delta_from(drag.start);
                    self.crop_box = Some(drag.start_box.dragged_within(
                        drag.handle,
                        dx,
                        dy,
                        self.settings.min_crop_size,
                        self.canvas.as_size(),
                    ));
                }
            }
        }
    }

    pub fn pointer_released(&mut self) {
        if self.drag.stop() && self.is_ready() {
            self.commit();
        }
        self.crop_drag = None;
    }

    /// Zooms by ×0.9 for positive `delta_y`, otherwise ×1.1, and commits.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.is_ready() {
            return;
        }
        self.transform.scale = if delta_y > WHEEL_ZOOM_OUT_THRESHOLD {
            self.transform.scale.zoom_out()
        } else {
            self.transform.scale.zoom_in()
        };
        self.commit();
    }
}
