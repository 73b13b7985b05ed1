// SPDX-License-Identifier: MPL-2.0
//! Geometry/transform model for a single raster placed on the canvas.
//!
//! The state is a plain value: every mutation returns or edits a copy, and
//! callers decide when a change is committed to history.

use super::newtypes::{Axis, RotationAngle, StretchFactor, ZoomScale};

/// A point or offset in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair in pixels (fractional while transforms are applied).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// How the loaded image is mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    pub scale: ZoomScale,
    pub stretch_x: StretchFactor,
    pub stretch_y: StretchFactor,
    /// Top-left of the scaled (unrotated) image in canvas space.
    pub position: Point,
    pub rotation: RotationAngle,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl TransformState {
    /// Image size after uniform scale and per-axis stretch.
    #[must_use]
    pub fn display_size(&self, natural: Size) -> Size {
        Size::new(
            natural.width * self.scale.value() * self.stretch_x.value(),
            natural.height * self.scale.value() * self.stretch_y.value(),
        )
    }

    /// Center of the displayed image in canvas space.
    #[must_use]
    pub fn display_center(&self, natural: Size) -> Point {
        let display = self.display_size(natural);
        Point::new(
            self.position.x + display.width / 2.0,
            self.position.y + display.height / 2.0,
        )
    }

    /// Position that centers the displayed image in `canvas`.
    #[must_use]
    pub fn centered_position(&self, natural: Size, canvas: Size) -> Point {
        let display = self.display_size(natural);
        Point::new(
            (canvas.width - display.width) / 2.0,
            (canvas.height - display.height) / 2.0,
        )
    }

    /// Moves the image so it is centered in `canvas`.
    pub fn center(&mut self, natural: Size, canvas: Size) {
        self.position = self.centered_position(natural, canvas);
    }

    /// Defaults (scale 1, stretch 1, no rotation, no flips) centered in `canvas`.
    #[must_use]
    pub fn centered_default(natural: Size, canvas: Size) -> Self {
        let mut state = Self::default();
        state.center(natural, canvas);
        state
    }

    #[must_use]
    pub fn stretch(&self, axis: Axis) -> StretchFactor {
        match axis {
            Axis::X => self.stretch_x,
            Axis::Y => self.stretch_y,
        }
    }

    pub fn set_stretch(&mut self, axis: Axis, factor: StretchFactor) {
        match axis {
            Axis::X => self.stretch_x = factor,
            Axis::Y => self.stretch_y = factor,
        }
    }

    /// Toggles the flip flag for `axis` (`X` mirrors left-to-right).
    pub fn toggle_flip(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.flip_horizontal = !self.flip_horizontal,
            Axis::Y => self.flip_vertical = !self.flip_vertical,
        }
    }

    /// Signed scale factors fed to the renderer: flip sign × scale × stretch.
    #[must_use]
    pub fn signed_axis_scale(&self) -> (f32, f32) {
        let sx = if self.flip_horizontal { -1.0 } else { 1.0 };
        let sy = if self.flip_vertical { -1.0 } else { 1.0 };
        (
            sx * self.scale.value() * self.stretch_x.value(),
            sy * self.scale.value() * self.stretch_y.value(),
        )
    }
}
