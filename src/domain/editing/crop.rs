// SPDX-License-Identifier: MPL-2.0
//! Crop box geometry: default placement, handle hit-testing and drag edits.
//!
//! All coordinates are canvas pixels. The box is scratch state: edits here
//! never touch the transform history.

use super::transform::{Point, Size};

/// Crop rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Which part of the crop box a drag grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    /// The body of the box: translate without resizing.
    Move,
}

impl CropHandle {
    /// Corner handles in hit-test priority order.
    pub const CORNERS: [CropHandle; 4] = [
        CropHandle::NorthWest,
        CropHandle::NorthEast,
        CropHandle::SouthWest,
        CropHandle::SouthEast,
    ];

    fn is_west(self) -> bool {
        matches!(self, CropHandle::NorthWest | CropHandle::SouthWest)
    }

    fn is_north(self) -> bool {
        matches!(self, CropHandle::NorthWest | CropHandle::NorthEast)
    }
}

impl CropBox {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A centered box covering `coverage` of the canvas on each axis.
    #[must_use]
    pub fn centered(canvas: Size, coverage: f32) -> Self {
        let width = canvas.width * coverage;
        let height = canvas.height * coverage;
        Self::new(
            (canvas.width - width) / 2.0,
            (canvas.height - height) / 2.0,
            width,
            height,
        )
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center of the given corner handle.
    #[must_use]
    pub fn corner(&self, handle: CropHandle) -> Option<Point> {
        match handle {
            CropHandle::NorthWest => Some(Point::new(self.x, self.y)),
            CropHandle::NorthEast => Some(Point::new(self.right(), self.y)),
            CropHandle::SouthWest => Some(Point::new(self.x, self.bottom())),
            CropHandle::SouthEast => Some(Point::new(self.right(), self.bottom())),
            CropHandle::Move => None,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Returns the handle under `point`: corners first (within `tolerance` on
    /// each axis, in `nw, ne, sw, se` order), then the box body.
    #[must_use]
    pub fn hit_test(&self, point: Point, tolerance: f32) -> Option<CropHandle> {
        CropHandle::CORNERS
            .into_iter()
            .find(|handle| {
                self.corner(*handle).is_some_and(|corner| {
                    (point.x - corner.x).abs() <= tolerance && (point.y - corner.y).abs() <= tolerance
                })
            })
            .or_else(|| self.contains(point).then_some(CropHandle::Move))
    }

    /// Applies a drag of `(dx, dy)` on `handle` to this (starting) box.
    ///
    /// Sides shorter than `min_size` are pinned to `min_size`; for west and
    /// north handles the opposite edge stays where it was.
    #[must_use]
    pub fn dragged(&self, handle: CropHandle, dx: f32, dy: f32, min_size: f32) -> Self {
        let mut next = *self;
        match handle {
            CropHandle::Move => {
                next.x += dx;
                next.y += dy;
                return next;
            }
            CropHandle::NorthWest => {
                next.x += dx;
                next.y += dy;
                next.width -= dx;
                next.height -= dy;
            }
            CropHandle::NorthEast => {
                next.y += dy;
                next.width += dx;
                next.height -= dy;
            }
            CropHandle::SouthWest => {
                next.x += dx;
                next.width -= dx;
                next.height += dy;
            }
            CropHandle::SouthEast => {
                next.width += dx;
                next.height += dy;
            }
        }

        if next.width < min_size {
            next.width = min_size;
            if handle.is_west() {
                next.x = self.right() - min_size;
            }
        }
        if next.height < min_size {
            next.height = min_size;
            if handle.is_north() {
                next.y = self.bottom() - min_size;
            }
        }
        next
    }

    /// Like [`Self::dragged`], kept inside `canvas`. Moves slide along the
    /// canvas edges; resizes stop at them.
    #[must_use]
    pub fn dragged_within(
        &self,
        handle: CropHandle,
        dx: f32,
        dy: f32,
        min_size: f32,
        canvas: Size,
    ) -> Self {
        let next = self.dragged(handle, dx, dy, min_size);
        if handle == CropHandle::Move {
            next.fitted(canvas)
        } else {
            next.clipped(canvas)
        }
    }

    /// Shrinks the box to at most the canvas size and shifts it inside.
    #[must_use]
    pub fn fitted(&self, canvas: Size) -> Self {
        let width = self.width.min(canvas.width).max(0.0);
        let height = self.height.min(canvas.height).max(0.0);
        Self::new(
            self.x.clamp(0.0, (canvas.width - width).max(0.0)),
            self.y.clamp(0.0, (canvas.height - height).max(0.0)),
            width,
            height,
        )
    }

    /// The part of the box lying inside `canvas`.
    #[must_use]
    pub fn clipped(&self, canvas: Size) -> Self {
        let left = self.x.max(0.0);
        let top = self.y.max(0.0);
        let right = self.right().min(canvas.width);
        let bottom = self.bottom().min(canvas.height);
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// Maps the box from a canvas of size `from` onto one of size `to`,
    /// keeping its relative placement, then fits it inside `to`.
    #[must_use]
    pub fn rescaled(&self, from: Size, to: Size, min_size: f32) -> Self {
        if from.width <= 0.0 || from.height <= 0.0 {
            return self.fitted(to);
        }
        let sx = to.width / from.width;
        let sy = to.height / from.height;
        Self::new(
            self.x * sx,
            self.y * sy,
            (self.width * sx).max(min_size),
            (self.height * sy).max(min_size),
        )
        .fitted(to)
    }

    /// Whether the box is large enough to extract (more than one pixel per side).
    #[must_use]
    pub fn is_extractable(&self) -> bool {
        self.width > 1.0 && self.height > 1.0
    }
}
