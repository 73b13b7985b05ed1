// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use super::SessionId;
use crate::domain::editing::{Axis, Point, Size};
use crate::error::Error;
use crate::media::{ExportPayload, LoadedImage};

/// Toolbar and slider messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    ZoomIn,
    ZoomOut,
    /// Scale slider moved (live preview, not yet in history)
    ScaleChanged(f32),
    /// Scale slider released
    ScaleReleased,
    /// Stretch slider moved, value in percent
    StretchChanged(Axis, f32),
    StretchReleased,
    RotateClockwise,
    RotateCounterClockwise,
    FlipHorizontal,
    FlipVertical,
    Center,
    Reset,
    Undo,
    Redo,
    StartCrop,
    ApplyCrop,
    CancelCrop,
    Save,
    Close,
}

/// Pointer input captured on the canvas, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMessage {
    PointerPressed(Point),
    /// May lie outside the canvas while a drag is in progress.
    PointerMoved(Point),
    PointerReleased,
    /// Browser-style wheel delta: positive scrolls down (zooms out).
    Wheel {
        delta_y: f32,
    },
}

/// Messages handled by [`super::State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Canvas(CanvasMessage),
    /// Result of a load started by [`super::State::open`].
    ImageLoaded {
        session: SessionId,
        result: Result<LoadedImage, Error>,
    },
    /// Host reply to [`Event::SaveRequested`].
    SaveFinished(Result<(), String>),
    /// Available window area changed
    ViewportResized(Size),
    DismissAlert,
    /// Raw event for keyboard shortcuts
    RawEvent(iced::Event),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the host for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user dismissed the editor. Emitted once per dismissal.
    Closed,
    /// Hand-off of the exported frame; answer with [`Message::SaveFinished`].
    SaveRequested(ExportPayload),
}
