// SPDX-License-Identifier: MPL-2.0
//! Editor layout: toolbar, sliders, canvas and alert/error panels.

use super::overlay::PointerCapture;
use super::{Message, Phase, State, ToolbarMessage};
use crate::domain::editing::newtypes::{scale_bounds, stretch_bounds};
use crate::domain::editing::Axis;
use crate::error::EditorError;
use iced::widget::{button, column, container, image, row, slider, text, Canvas, Stack};
use iced::{Alignment, Element, Length};

const SPACING: f32 = 8.0;
const PADDING: f32 = 12.0;
const SLIDER_WIDTH: f32 = 160.0;
const SCALE_STEP: f32 = 0.01;
const STRETCH_STEP: f32 = 1.0;

fn tool_button(label: &str, message: Option<ToolbarMessage>) -> button::Button<'_, Message> {
    button(text(label)).on_press_maybe(message.map(Message::Toolbar))
}

/// Renders the editor for its current phase.
pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.phase() {
        Phase::Closed => text("No image open").into(),
        Phase::Loading => text("Loading image…").into(),
        Phase::Error(err) => error_panel(err),
        Phase::Ready => ready_view(state),
    };

    container(content)
        .padding(PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn error_panel(err: &EditorError) -> Element<'_, Message> {
    column![
        text(err.title()).size(20),
        text(err.to_string()),
        tool_button("Close Editor", Some(ToolbarMessage::Close)),
    ]
    .spacing(SPACING)
    .align_x(Alignment::Center)
    .into()
}

fn ready_view(state: &State) -> Element<'_, Message> {
    let mut layout = column![toolbar(state), sliders(state)]
        .spacing(SPACING)
        .align_x(Alignment::Center);

    if let Some(alert) = state.alert() {
        layout = layout.push(
            row![
                text(format!("{}: {alert}", alert.title())),
                button(text("Dismiss")).on_press(Message::DismissAlert),
            ]
            .spacing(SPACING)
            .align_y(Alignment::Center),
        );
    }

    layout.push(canvas_area(state)).into()
}

fn toolbar(state: &State) -> Element<'_, Message> {
    let idle = !state.is_saving();
    let enabled = |on: bool, message: ToolbarMessage| on.then_some(message);

    let crop_controls = if state.is_cropping() {
        row![
            tool_button("Apply Crop", Some(ToolbarMessage::ApplyCrop)),
            tool_button("Cancel Crop", Some(ToolbarMessage::CancelCrop)),
        ]
        .spacing(SPACING)
    } else {
        row![tool_button("Crop", Some(ToolbarMessage::StartCrop))]
    };

    row![
        tool_button("−", Some(ToolbarMessage::ZoomOut)),
        tool_button("+", Some(ToolbarMessage::ZoomIn)),
        tool_button("⟲", Some(ToolbarMessage::RotateCounterClockwise)),
        tool_button("⟳", Some(ToolbarMessage::RotateClockwise)),
        tool_button("Flip H", Some(ToolbarMessage::FlipHorizontal)),
        tool_button("Flip V", Some(ToolbarMessage::FlipVertical)),
        tool_button("Center", Some(ToolbarMessage::Center)),
        tool_button("Reset", Some(ToolbarMessage::Reset)),
        crop_controls,
        tool_button("Undo", enabled(state.can_undo(), ToolbarMessage::Undo)),
        tool_button("Redo", enabled(state.can_redo(), ToolbarMessage::Redo)),
        tool_button(
            if idle { "Save" } else { "Saving…" },
            enabled(idle, ToolbarMessage::Save)
        ),
        tool_button("Close", Some(ToolbarMessage::Close)),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center)
    .into()
}

fn sliders(state: &State) -> Element<'_, Message> {
    let transform = state.transform();

    let scale = slider(
        scale_bounds::MIN..=scale_bounds::MAX,
        transform.scale.value(),
        |value| Message::Toolbar(ToolbarMessage::ScaleChanged(value)),
    )
    .step(SCALE_STEP)
    .on_release(Message::Toolbar(ToolbarMessage::ScaleReleased))
    .width(SLIDER_WIDTH);

    let stretch = |axis: Axis| {
        slider(
            stretch_bounds::MIN_PERCENT..=stretch_bounds::MAX_PERCENT,
            transform.stretch(axis).percent(),
            move |value| Message::Toolbar(ToolbarMessage::StretchChanged(axis, value)),
        )
        .step(STRETCH_STEP)
        .on_release(Message::Toolbar(ToolbarMessage::StretchReleased))
        .width(SLIDER_WIDTH)
    };

    row![
        text(format!("Scale {:.0}%", transform.scale.value() * 100.0)),
        scale,
        text(format!("Stretch X {:.0}%", transform.stretch_x.percent())),
        stretch(Axis::X),
        text(format!("Stretch Y {:.0}%", transform.stretch_y.percent())),
        stretch(Axis::Y),
        text(format!("{}°", transform.rotation.degrees())),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center)
    .into()
}

fn canvas_area(state: &State) -> Element<'_, Message> {
    let canvas = state.canvas_size();
    // Canvas dimensions are bounded by the window size.
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (
        Length::Fixed(canvas.width as f32),
        Length::Fixed(canvas.height as f32),
    );

    let Some(handle) = state.display_handle() else {
        return text("Rendering…").into();
    };

    Stack::new()
        .push(image(handle.clone()).width(width).height(height))
        .push(
            Canvas::new(PointerCapture { tool: state.tool() })
                .width(width)
                .height(height),
        )
        .into()
}
