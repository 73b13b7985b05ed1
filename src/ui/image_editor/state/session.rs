// SPDX-License-Identifier: MPL-2.0
//! Session lifecycle: open, asynchronous load results, close and viewport
//! changes.

use crate::domain::editing::{AspectRatio, CanvasSize, Size, TransformState};
use crate::error::{EditorError, Error};
use crate::media::{ImageSource, LoadedImage, Renderer};
use crate::ui::image_editor::{
    Event, LoadRequest, OpenRequest, Phase, SessionId, State, ToolMode,
};

impl State {
    /// Starts a new session, discarding any previous one.
    ///
    /// Returns the load the host must run, or `None` when the source is empty
    /// (the editor then shows a load error).
    pub fn open(&mut self, request: OpenRequest) -> Option<LoadRequest> {
        self.close();
        self.session = self.session.next();
        self.template_name = request.template_name;
        self.template_aspect = request.template_aspect;
        self.recompute_canvas();

        let Some(source) = ImageSource::parse(&request.source) else {
            tracing::warn!("open requested without an image source");
            self.phase = Phase::Error(EditorError::Load("no image source provided".into()));
            return None;
        };

        tracing::info!(session = self.session.0, source = %source.label(), "loading image");
        self.phase = Phase::Loading;
        Some(LoadRequest {
            session: self.session,
            source,
        })
    }

    /// Applies a load result. Results for stale sessions, or arriving while
    /// not loading, are ignored.
    pub fn image_loaded(&mut self, session: SessionId, result: Result<LoadedImage, Error>) {
        if session != self.session || self.phase != Phase::Loading {
            tracing::debug!(
                session = session.0,
                current = self.session.0,
                "ignoring stale image load"
            );
            return;
        }

        let loaded = result.and_then(|image| Renderer::new(&image).map(|renderer| (image, renderer)));
        match loaded {
            Ok((image, renderer)) => {
                tracing::info!(
                    width = image.width(),
                    height = image.height(),
                    "image loaded"
                );
                let natural = image.natural_size();
                self.image = Some(image);
                self.image_revision += 1;
                self.renderer = Some(renderer);
                self.recompute_canvas();
                self.transform = TransformState::centered_default(natural, self.canvas.as_size());
                self.history.clear();
                self.commit();
                self.phase = Phase::Ready;
            }
            Err(err) => {
                tracing::warn!(%err, "image load failed");
                self.phase = Phase::Error(err.into());
            }
        }
    }

    /// Resets every piece of session state. Late load results are dropped.
    pub fn close(&mut self) {
        if self.phase != Phase::Closed {
            tracing::debug!(session = self.session.0, "closing editor session");
        }
        self.session = self.session.next();
        self.phase = Phase::Closed;
        self.template_name = None;
        self.template_aspect = None;
        self.image = None;
        self.renderer = None;
        self.transform = TransformState::default();
        self.history.clear();
        self.tool = ToolMode::Move;
        self.crop_box = None;
        self.drag.stop();
        self.crop_drag = None;
        self.alert = None;
        self.is_saving = false;
        self.frame = None;
        self.render_key = None;
        self.display = None;
        self.recompute_canvas();
    }

    /// User dismissal: closes and reports [`Event::Closed`] once.
    pub fn request_close(&mut self) -> Event {
        if self.phase == Phase::Closed {
            return Event::None;
        }
        self.close();
        Event::Closed
    }

    /// Recomputes the canvas for a new window area. An active crop box is
    /// mapped onto the new canvas.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        let previous = self.canvas;
        self.recompute_canvas();
        if self.canvas != previous {
            self.refit_crop_box(previous.as_size());
        }
    }

    pub(crate) fn recompute_canvas(&mut self) {
        let aspect = AspectRatio::resolve(
            self.template_aspect.as_deref(),
            self.image.as_ref().map(LoadedImage::dimensions),
            &self.settings.fallback_aspect,
        );
        self.canvas = CanvasSize::fit(
            aspect,
            self.viewport,
            self.settings.viewport_width_fraction,
            self.settings.viewport_height_fraction,
        );
    }
}
