// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes go to the host so the editor canvas can be refitted.
//! Keyboard events that no widget captured go to the editor as shortcuts.
//! Pointer input is captured by the editor's own canvas layer.

use super::Message;
use crate::ui::image_editor;
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        event::Event::Keyboard(..) if status == event::Status::Ignored => Some(
            Message::Editor(image_editor::Message::RawEvent(event.clone())),
        ),
        _ => None,
    })
}
