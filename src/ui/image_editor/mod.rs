// SPDX-License-Identifier: MPL-2.0
//! Interactive transform and crop editor.
//!
//! This module follows a "state down, messages up" pattern: the host forwards
//! [`Message`]s to [`State::update`] and reacts to the returned [`Event`].
//! The editor never performs I/O itself; loading and saving are requested from
//! the host ([`LoadRequest`], [`Event::SaveRequested`]) and their results are
//! fed back as messages.

use crate::config::EditorSettings;
use crate::domain::editing::{
    CanvasSize, CropBox, HistoryStack, Size, TransformState,
};
use crate::error::EditorError;
use crate::media::{ImageSource, LoadedImage, RenderedFrame, Renderer};
use crate::ui::state::DragState;
use iced::widget::image;

mod messages;
mod overlay;
mod state;
mod view;

pub use messages::{CanvasMessage, Event, Message, ToolbarMessage};
pub use state::crop::CropDrag;
pub use view::view;

/// Lifecycle of one editing session.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No image open.
    Closed,
    /// Source requested, waiting for [`Message::ImageLoaded`].
    Loading,
    /// Image decoded and interactive.
    Ready,
    /// The source could not be loaded; only closing is possible.
    Error(EditorError),
}

/// Active pointer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Drag pans the image.
    #[default]
    Move,
    /// Drag edits the crop box.
    Crop,
}

/// Identifies one open/load cycle; results from older sessions are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What the host asks the editor to open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenRequest {
    /// Path, `file://` or `http(s)://` URL, or `data:` URI.
    pub source: String,
    /// Used to derive the export file name.
    pub template_name: Option<String>,
    /// `"W:H"` canvas aspect; the image's own aspect is used when absent or invalid.
    pub template_aspect: Option<String>,
}

/// Load the host must run, then answer with [`Message::ImageLoaded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub session: SessionId,
    pub source: ImageSource,
}

/// Local UI state for the editor.
#[derive(Clone)]
pub struct State {
    settings: EditorSettings,
    phase: Phase,
    session: SessionId,
    template_name: Option<String>,
    template_aspect: Option<String>,
    viewport: Size,
    canvas: CanvasSize,
    image: Option<LoadedImage>,
    /// Bumped every time `image` is replaced.
    image_revision: u64,
    renderer: Option<Renderer>,
    transform: TransformState,
    history: HistoryStack<TransformState>,
    tool: ToolMode,
    crop_box: Option<CropBox>,
    /// Pan drag in move mode
    drag: DragState,
    /// Handle drag in crop mode
    crop_drag: Option<CropDrag>,
    alert: Option<EditorError>,
    is_saving: bool,
    frame: Option<RenderedFrame>,
    render_key: Option<state::render::RenderKey>,
    render_count: u64,
    display: Option<image::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("session", &self.session)
            .field("canvas", &self.canvas)
            .field("image", &self.image)
            .field("transform", &self.transform)
            .field("history_len", &self.history.len())
            .field("history_index", &self.history.index())
            .field("tool", &self.tool)
            .field("crop_box", &self.crop_box)
            .field("is_saving", &self.is_saving)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates a closed editor for a window area of `viewport`.
    #[must_use]
    pub fn new(settings: EditorSettings, viewport: Size) -> Self {
        let history = HistoryStack::new(settings.history_capacity);
        let mut state = Self {
            settings,
            phase: Phase::Closed,
            session: SessionId::default(),
            template_name: None,
            template_aspect: None,
            viewport,
            canvas: CanvasSize {
                width: 1,
                height: 1,
            },
            image: None,
            image_revision: 0,
            renderer: None,
            transform: TransformState::default(),
            history,
            tool: ToolMode::Move,
            crop_box: None,
            drag: DragState::default(),
            crop_drag: None,
            alert: None,
            is_saving: false,
            frame: None,
            render_key: None,
            render_count: 0,
            display: None,
        };
        state.recompute_canvas();
        state
    }

    /// Update the state and emit an [`Event`] for the host when needed.
    pub fn update(&mut self, message: Message) -> Event {
        let event = match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Canvas(msg) => {
                self.handle_canvas_message(msg);
                Event::None
            }
            Message::ImageLoaded { session, result } => {
                self.image_loaded(session, result);
                Event::None
            }
            Message::SaveFinished(result) => {
                self.save_finished(result);
                Event::None
            }
            Message::ViewportResized(size) => {
                self.set_viewport(size);
                Event::None
            }
            Message::DismissAlert => {
                self.alert = None;
                Event::None
            }
            Message::RawEvent(event) => self.handle_raw_event(&event),
        };
        self.refresh_frame();
        event
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[must_use]
    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    #[must_use]
    pub fn is_cropping(&self) -> bool {
        self.tool == ToolMode::Crop
    }

    /// Crop box, present only in crop mode.
    #[must_use]
    pub fn crop_box(&self) -> Option<CropBox> {
        self.crop_box
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging || self.crop_drag.is_some()
    }

    /// Pending non-fatal error to show as an alert.
    #[must_use]
    pub fn alert(&self) -> Option<&EditorError> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// History cursor, `None` while the history is empty.
    #[must_use]
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Last rendered frame, if an image is loaded.
    #[must_use]
    pub fn frame(&self) -> Option<&RenderedFrame> {
        self.frame.as_ref()
    }

    /// Composited frame for the image widget.
    #[must_use]
    pub fn display_handle(&self) -> Option<&image::Handle> {
        self.display.as_ref()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}

#[cfg(test)]
mod tests;
