// SPDX-License-Identifier: MPL-2.0
//! Crop extraction from the rendered image layer.

use crate::domain::editing::CropBox;
use crate::error::EditorError;
use crate::media::image::LoadedImage;
use image_rs::{imageops, Rgba, RgbaImage};

/// Copies the `crop` rectangle out of `rendered` into a new image.
///
/// The result is `crop.width × crop.height` (rounded) on a white background;
/// parts of the box that fall outside the rendered frame stay white.
///
/// # Errors
///
/// [`EditorError::CropValidation`] when a side is not larger than one pixel,
/// [`EditorError::CropDecode`] when the new raster cannot be built.
pub fn extract(rendered: &RgbaImage, crop: &CropBox) -> Result<LoadedImage, EditorError> {
    if !crop.is_extractable() {
        return Err(EditorError::CropValidation(format!(
            "crop area {:.0}x{:.0} is too small",
            crop.width, crop.height
        )));
    }

    // Canvas-bounded sizes; rounding keeps the box aligned to device pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (crop.width.round() as u32, crop.height.round() as u32);
    #[allow(clippy::cast_possible_truncation)]
    let (origin_x, origin_y) = (crop.x.round() as i64, crop.y.round() as i64);

    let mut region = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut region, rendered, -origin_x, -origin_y);

    LoadedImage::from_raw(width, height, region.into_raw())
        .map_err(|err| EditorError::CropDecode(err.to_string()))
}
