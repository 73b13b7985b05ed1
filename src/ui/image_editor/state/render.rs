// SPDX-License-Identifier: MPL-2.0
//! Frame cache: re-render only when something visible changed.

use crate::domain::editing::{CanvasSize, CropBox, TransformState};
use crate::media::Decorations;
use crate::ui::image_editor::State;
use iced::widget::image;

/// Inputs that determine the rendered pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderKey {
    image_revision: u64,
    transform: TransformState,
    /// Present only in crop mode.
    crop: Option<CropBox>,
    canvas: CanvasSize,
}

impl State {
    fn render_key(&self) -> RenderKey {
        RenderKey {
            image_revision: self.image_revision,
            transform: self.transform,
            crop: self.crop_box.filter(|_| self.is_cropping()),
            canvas: self.canvas,
        }
    }

    /// Renders a new frame if the render key changed since the last one.
    pub(crate) fn refresh_frame(&mut self) {
        let Some(renderer) = self.renderer.as_ref() else {
            self.frame = None;
            self.display = None;
            self.render_key = None;
            return;
        };

        let key = self.render_key();
        if self.render_key.as_ref() == Some(&key) {
            return;
        }

        let decorations = Decorations {
            crop: key.crop,
            handle_size: self.settings.crop_handle_size,
        };
        match renderer.render(&self.transform, self.canvas, &decorations) {
            Ok(frame) => {
                self.display = Some(image::Handle::from_rgba(
                    frame.width(),
                    frame.height(),
                    frame.display_rgba(),
                ));
                self.frame = Some(frame);
                self.render_key = Some(key);
                self.render_count += 1;
            }
            Err(err) => {
                tracing::warn!(%err, "render failed");
                self.frame = None;
                self.display = None;
                self.render_key = None;
            }
        }
    }
}
