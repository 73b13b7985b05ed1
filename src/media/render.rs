// SPDX-License-Identifier: MPL-2.0
//! Deterministic CPU renderer for the editor canvas.
//!
//! A frame has two layers. The image layer holds the white background and the
//! transformed raster; crop extraction and export read only this layer. The
//! overlay layer holds UI decorations (selection outline, crop mask, crop
//! border, corner handles) and is composited on top for display only.

use crate::domain::editing::{CanvasSize, CropBox, CropHandle, Size, TransformState};
use crate::error::{Error, Result};
use crate::media::image::{rgba_from_pixmap, LoadedImage};
use image_rs::RgbaImage;
use tiny_skia::{
    Color, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, StrokeDash,
    Transform,
};

const OUTLINE_RGBA: [u8; 4] = [59, 130, 246, 255];
const OUTLINE_WIDTH: f32 = 2.0;
const OUTLINE_DASH: [f32; 2] = [5.0, 5.0];
const MASK_ALPHA: u8 = 128;
const CROP_BORDER_WIDTH: f32 = 2.0;

/// Decorations drawn on the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decorations {
    /// Crop box while crop mode is active; `None` draws the selection outline.
    pub crop: Option<CropBox>,
    /// Side length of the square corner handles.
    pub handle_size: f32,
}

/// One rendered canvas frame.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    image: Pixmap,
    overlay: Pixmap,
}

impl RenderedFrame {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Background plus transformed raster, without decorations.
    #[must_use]
    pub fn image_layer(&self) -> &Pixmap {
        &self.image
    }

    /// Decorations only, transparent elsewhere.
    #[must_use]
    pub fn overlay_layer(&self) -> &Pixmap {
        &self.overlay
    }

    /// Image layer as straight-alpha RGBA (the pixels crop and export see).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the pixel buffer cannot be read back.
    pub fn image_rgba(&self) -> Result<RgbaImage> {
        rgba_from_pixmap(&self.image)
            .ok_or_else(|| Error::Render("failed to read back image layer".into()))
    }

    /// Both layers composited, as straight-alpha RGBA bytes for display.
    #[must_use]
    pub fn display_rgba(&self) -> Vec<u8> {
        let mut composite = self.image.clone();
        composite.draw_pixmap(
            0,
            0,
            self.overlay.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        rgba_from_pixmap(&composite)
            .map(RgbaImage::into_raw)
            .unwrap_or_default()
    }
}

/// Renders frames of one loaded image.
///
/// Holds the premultiplied source pixmap so repeated renders skip the
/// conversion.
#[derive(Debug, Clone)]
pub struct Renderer {
    source: Pixmap,
    natural: Size,
}

impl Renderer {
    /// Prepares a renderer for `image`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the source pixmap cannot be allocated.
    pub fn new(image: &LoadedImage) -> Result<Self> {
        let source = image
            .to_pixmap()
            .ok_or_else(|| Error::Render("failed to allocate source pixmap".into()))?;
        Ok(Self {
            source,
            natural: image.natural_size(),
        })
    }

    /// Draws the image under `transform` onto a `canvas`-sized frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the frame buffers cannot be allocated.
    pub fn render(
        &self,
        transform: &TransformState,
        canvas: CanvasSize,
        decorations: &Decorations,
    ) -> Result<RenderedFrame> {
        let mut image = Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| Error::Render(format!("invalid canvas {}x{}", canvas.width, canvas.height)))?;
        let mut overlay = Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| Error::Render("failed to allocate overlay".into()))?;

        image.fill(Color::WHITE);

        let matrix = self.image_matrix(transform);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        image.draw_pixmap(0, 0, self.source.as_ref(), &paint, matrix, None);

        match decorations.crop {
            None => draw_selection_outline(&mut overlay, matrix, self.natural),
            Some(crop) => draw_crop_decorations(&mut overlay, canvas, &crop, decorations.handle_size),
        }

        Ok(RenderedFrame { image, overlay })
    }

    /// translate(center) · rotate · scale(flip·scale·stretch) · translate(-natural/2)
    fn image_matrix(&self, transform: &TransformState) -> Transform {
        let center = transform.display_center(self.natural);
        let (sx, sy) = transform.signed_axis_scale();
        Transform::from_translate(center.x, center.y)
            .pre_concat(Transform::from_rotate(f32::from(transform.rotation.degrees())))
            .pre_scale(sx, sy)
            .pre_translate(-self.natural.width / 2.0, -self.natural.height / 2.0)
    }
}

/// One-shot convenience around [`Renderer`].
///
/// # Errors
///
/// See [`Renderer::new`] and [`Renderer::render`].
pub fn render_frame(
    image: &LoadedImage,
    transform: &TransformState,
    canvas: CanvasSize,
    decorations: &Decorations,
) -> Result<RenderedFrame> {
    Renderer::new(image)?.render(transform, canvas, decorations)
}

fn solid_paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

// The outline follows the rotated image bounds but keeps a constant on-screen
// stroke width, so corners are mapped to canvas space first.
fn draw_selection_outline(overlay: &mut Pixmap, matrix: Transform, natural: Size) {
    let mut corners = [
        tiny_skia::Point::from_xy(0.0, 0.0),
        tiny_skia::Point::from_xy(natural.width, 0.0),
        tiny_skia::Point::from_xy(natural.width, natural.height),
        tiny_skia::Point::from_xy(0.0, natural.height),
    ];
    matrix.map_points(&mut corners);

    let mut builder = PathBuilder::new();
    builder.move_to(corners[0].x, corners[0].y);
    for corner in &corners[1..] {
        builder.line_to(corner.x, corner.y);
    }
    builder.close();
    let Some(path) = builder.finish() else {
        return;
    };

    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        dash: StrokeDash::new(OUTLINE_DASH.to_vec(), 0.0),
        ..Stroke::default()
    };
    overlay.stroke_path(&path, &solid_paint(OUTLINE_RGBA), &stroke, Transform::identity(), None);
}

fn draw_crop_decorations(overlay: &mut Pixmap, canvas: CanvasSize, crop: &CropBox, handle_size: f32) {
    let canvas = canvas.as_size();
    let mask = solid_paint([0, 0, 0, MASK_ALPHA]);

    // Top, bottom, left and right bands around the box.
    let bands = [
        Rect::from_xywh(0.0, 0.0, canvas.width, crop.y),
        Rect::from_xywh(0.0, crop.bottom(), canvas.width, canvas.height - crop.bottom()),
        Rect::from_xywh(0.0, crop.y, crop.x, crop.height),
        Rect::from_xywh(crop.right(), crop.y, canvas.width - crop.right(), crop.height),
    ];
    for band in bands.into_iter().flatten() {
        overlay.fill_rect(band, &mask, Transform::identity(), None);
    }

    let white = solid_paint([255, 255, 255, 255]);
    if let Some(border) = Rect::from_xywh(crop.x, crop.y, crop.width, crop.height) {
        let stroke = Stroke {
            width: CROP_BORDER_WIDTH,
            ..Stroke::default()
        };
        overlay.stroke_path(
            &PathBuilder::from_rect(border),
            &white,
            &stroke,
            Transform::identity(),
            None,
        );
    }

    let half = handle_size / 2.0;
    for corner in CropHandle::CORNERS.into_iter().filter_map(|h| crop.corner(h)) {
        if let Some(square) = Rect::from_xywh(corner.x - half, corner.y - half, handle_size, handle_size) {
            overlay.fill_rect(square, &white, Transform::identity(), None);
        }
    }
}
