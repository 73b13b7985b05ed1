// SPDX-License-Identifier: MPL-2.0
//! Crop mode: entering, leaving and applying the crop box.

use crate::config::defaults::DEFAULT_CROP_COVERAGE;
use crate::domain::editing::{CropBox, CropHandle, Point, Size, TransformState};
use crate::error::EditorError;
use crate::media::{crop, Renderer};
use crate::ui::image_editor::{State, ToolMode};

/// An in-progress crop handle drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropDrag {
    pub handle: CropHandle,
    /// Pointer position at press.
    pub start: Point,
    /// Box at press; edits are applied to this copy.
    pub start_box: CropBox,
}

impl State {
    /// Enters crop mode with a centered box covering 80% of the canvas.
    pub fn start_crop(&mut self) {
        if !self.is_ready() || self.tool == ToolMode::Crop {
            return;
        }
        self.drag.stop();
        self.tool = ToolMode::Crop;
        self.crop_box = Some(CropBox::centered(
            self.canvas.as_size(),
            DEFAULT_CROP_COVERAGE,
        ));
    }

    /// Leaves crop mode without changing the image.
    pub fn cancel_crop(&mut self) {
        self.tool = ToolMode::Move;
        self.crop_box = None;
        self.crop_drag = None;
    }

    /// Maps the crop box from a canvas of size `previous` onto the current
    /// one. A handle drag in progress is dropped.
    pub(crate) fn refit_crop_box(&mut self, previous: Size) {
        let canvas = self.canvas.as_size();
        let min_size = self.settings.min_crop_size;
        if let Some(crop) = self.crop_box.as_mut() {
            *crop = crop.rescaled(previous, canvas, min_size);
            self.crop_drag = None;
        }
    }

    /// Replaces the image with the pixels under the crop box.
    ///
    /// On success the transform resets to defaults (centered), crop mode ends
    /// and history restarts from that single snapshot: earlier entries were
    /// computed for the replaced image, so a crop cannot be undone. On
    /// failure nothing changes.
    ///
    /// # Errors
    ///
    /// [`EditorError::CropValidation`] for a degenerate box,
    /// [`EditorError::CropDecode`] when the new image cannot be built.
    pub fn apply_crop(&mut self) -> Result<(), EditorError> {
        if !self.is_ready() {
            return Ok(());
        }
        let Some(crop_box) = self.crop_box.filter(|_| self.tool == ToolMode::Crop) else {
            return Ok(());
        };
        if !crop_box.is_extractable() {
            return Err(EditorError::CropValidation(format!(
                "crop area {:.0}x{:.0} is too small",
                crop_box.width, crop_box.height
            )));
        }

        self.refresh_frame();
        let rendered = self
            .frame
            .as_ref()
            .ok_or_else(|| EditorError::CropDecode("no rendered frame".into()))?
            .image_rgba()
            .map_err(|err| EditorError::CropDecode(err.to_string()))?;

        let cropped = crop::extract(&rendered, &crop_box)?;
        let renderer =
            Renderer::new(&cropped).map_err(|err| EditorError::CropDecode(err.to_string()))?;

        tracing::info!(
            width = cropped.width(),
            height = cropped.height(),
            "crop applied"
        );

        let natural = cropped.natural_size();
        self.image = Some(cropped);
        self.image_revision += 1;
        self.renderer = Some(renderer);
        self.recompute_canvas();
        self.transform = TransformState::centered_default(natural, self.canvas.as_size());
        self.cancel_crop();
        self.history.clear();
        self.commit();
        Ok(())
    }
}
