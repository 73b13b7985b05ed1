// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use crate::domain::editing::Axis;
use crate::ui::image_editor::{CanvasMessage, Event, State, ToolbarMessage};
use iced::keyboard;

impl State {
    pub(crate) fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::ZoomIn => self.zoom_in(),
            ToolbarMessage::ZoomOut => self.zoom_out(),
            ToolbarMessage::ScaleChanged(factor) => self.preview_scale(factor),
            ToolbarMessage::StretchChanged(axis, percent) => self.preview_stretch(axis, percent),
            ToolbarMessage::ScaleReleased | ToolbarMessage::StretchReleased => {
                self.commit_if_changed();
            }
            ToolbarMessage::RotateClockwise => self.rotate(),
            ToolbarMessage::RotateCounterClockwise => self.rotate_counter_clockwise(),
            ToolbarMessage::FlipHorizontal => self.toggle_flip(Axis::X),
            ToolbarMessage::FlipVertical => self.toggle_flip(Axis::Y),
            ToolbarMessage::Center => self.center(),
            ToolbarMessage::Reset => self.reset(),
            ToolbarMessage::Undo => self.undo(),
            ToolbarMessage::Redo => self.redo(),
            ToolbarMessage::StartCrop => self.start_crop(),
            ToolbarMessage::ApplyCrop => self.apply_crop_or_alert(),
            ToolbarMessage::CancelCrop => self.cancel_crop(),
            ToolbarMessage::Save => return self.save(),
            ToolbarMessage::Close => return self.request_close(),
        }
        Event::None
    }

    pub(crate) fn handle_canvas_message(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::PointerPressed(position) => self.pointer_pressed(position),
            CanvasMessage::PointerMoved(position) => self.pointer_moved(position),
            CanvasMessage::PointerReleased => self.pointer_released(),
            CanvasMessage::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    pub(crate) fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Event::None;
        };

        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.is_cropping() {
                    self.cancel_crop();
                }
            }
            keyboard::Key::Named(keyboard::key::Named::Enter) => {
                if self.is_cropping() {
                    self.apply_crop_or_alert();
                }
            }
            keyboard::Key::Character(c) if modifiers.command() => {
                match c {
                    "z" | "Z" if modifiers.shift() => self.redo(),
                    "z" => self.undo(),
                    "y" => self.redo(),
                    _ => {}
                }
            }
            keyboard::Key::Character("r") if !modifiers.command() => self.rotate(),
            _ => {}
        }
        Event::None
    }

    fn apply_crop_or_alert(&mut self) {
        if let Err(err) = self.apply_crop() {
            tracing::warn!(%err, "crop rejected");
            self.alert = Some(err);
        }
    }
}
