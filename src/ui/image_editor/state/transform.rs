// SPDX-License-Identifier: MPL-2.0
//! Geometry operations on the live transform.
//!
//! Committing operations push one snapshot; `preview_*` variants only update
//! the live state and are committed later (slider release).

use crate::domain::editing::{Axis, Point, Size, StretchFactor, TransformState, ZoomScale};
use crate::media::LoadedImage;
use crate::ui::image_editor::State;

impl State {
    /// Sets the uniform scale (clamped) and commits.
    pub fn set_scale(&mut self, factor: f32) {
        if self.is_ready() {
            self.preview_scale(factor);
            self.commit();
        }
    }

    /// Sets the uniform scale without touching history.
    pub fn preview_scale(&mut self, factor: f32) {
        if self.is_ready() {
            self.transform.scale = ZoomScale::new(factor);
        }
    }

    pub fn zoom_in(&mut self) {
        if self.is_ready() {
            self.transform.scale = self.transform.scale.zoom_in();
            self.commit();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.is_ready() {
            self.transform.scale = self.transform.scale.zoom_out();
            self.commit();
        }
    }

    /// Sets one stretch axis from a percentage (clamped), recenters and commits.
    pub fn set_stretch(&mut self, axis: Axis, percent: f32) {
        if self.is_ready() {
            self.preview_stretch(axis, percent);
            self.commit();
        }
    }

    /// Like [`Self::set_stretch`] without the history push.
    pub fn preview_stretch(&mut self, axis: Axis, percent: f32) {
        if !self.is_ready() {
            return;
        }
        self.transform
            .set_stretch(axis, StretchFactor::from_percent(percent));
        if let Some(natural) = self.natural_size() {
            self.transform.center(natural, self.canvas.as_size());
        }
    }

    pub fn set_position(&mut self, position: Point) {
        if self.is_ready() {
            self.transform.position = position;
            self.commit();
        }
    }

    /// Rotates 90° clockwise.
    pub fn rotate(&mut self) {
        if self.is_ready() {
            self.transform.rotation = self.transform.rotation.rotate_clockwise();
            self.commit();
        }
    }

    pub fn rotate_counter_clockwise(&mut self) {
        if self.is_ready() {
            self.transform.rotation = self.transform.rotation.rotate_counterclockwise();
            self.commit();
        }
    }

    /// Toggles the flip on `axis` (`X` is horizontal).
    pub fn toggle_flip(&mut self, axis: Axis) {
        if self.is_ready() {
            self.transform.toggle_flip(axis);
            self.commit();
        }
    }

    /// Centers the image at its current display size.
    pub fn center(&mut self) {
        if let Some(natural) = self.natural_size().filter(|_| self.is_ready()) {
            self.transform.center(natural, self.canvas.as_size());
            self.commit();
        }
    }

    /// Restores scale, stretch, rotation and flips to defaults, centered.
    pub fn reset(&mut self) {
        if let Some(natural) = self.natural_size().filter(|_| self.is_ready()) {
            self.transform = TransformState::centered_default(natural, self.canvas.as_size());
            self.commit();
        }
    }

    pub(crate) fn natural_size(&self) -> Option<Size> {
        self.image.as_ref().map(LoadedImage::natural_size)
    }
}
