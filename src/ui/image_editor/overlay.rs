// SPDX-License-Identifier: MPL-2.0
//! Transparent canvas layer that turns mouse input into [`CanvasMessage`]s.
//!
//! Once a press lands on the canvas, moves and the release are forwarded
//! even when the cursor leaves the canvas bounds, so drags keep tracking.

use crate::domain::editing::Point;
use crate::ui::image_editor::{CanvasMessage, Message, ToolMode};
use iced::mouse;
use iced::widget::canvas;

/// Canvas program used to capture pointer input over the rendered frame.
pub struct PointerCapture {
    pub tool: ToolMode,
}

fn local_point(position: iced::Point, bounds: iced::Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// Turns a wheel scroll into a zoom request. Scrolling up yields a negative
/// `delta_y`. Horizontal-only scrolls yield nothing.
fn wheel_zoom(delta: &mouse::ScrollDelta) -> Option<CanvasMessage> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
    };
    (y != 0.0).then_some(CanvasMessage::Wheel { delta_y: -y })
}

impl canvas::Program<Message> for PointerCapture {
    /// Whether a press that started on the canvas is still held.
    type State = bool;

    fn update(
        &self,
        pressed: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let message = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                *pressed = true;
                CanvasMessage::PointerPressed(Point::new(position.x, position.y))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) if *pressed => {
                CanvasMessage::PointerMoved(local_point(*position, bounds))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if *pressed => {
                *pressed = false;
                CanvasMessage::PointerReleased
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                wheel_zoom(delta)?
            }
            _ => return None,
        };

        Some(Action::publish(Message::Canvas(message)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &iced::Renderer,
        _theme: &iced::Theme,
        _bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        pressed: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match (self.tool, *pressed, cursor.is_over(bounds)) {
            (ToolMode::Move, true, _) => mouse::Interaction::Grabbing,
            (ToolMode::Move, false, true) => mouse::Interaction::Grab,
            (ToolMode::Crop, _, true) | (ToolMode::Crop, true, false) => {
                mouse::Interaction::Crosshair
            }
            _ => mouse::Interaction::default(),
        }
    }
}
