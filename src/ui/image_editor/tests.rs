// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::config::EditorSettings;
use crate::domain::editing::{Axis, Point, RotationAngle};
use crate::error::Error;
use image_rs::{Rgba, RgbaImage};

const VIEWPORT: Size = Size {
    width: 1280.0,
    height: 800.0,
};
const RED: [u8; 4] = [255, 0, 0, 255];

fn solid_image(width: u32, height: u32, color: [u8; 4]) -> LoadedImage {
    LoadedImage::from_rgba_image(RgbaImage::from_pixel(width, height, Rgba(color)))
        .expect("valid image")
}

fn open_request(template_aspect: Option<&str>) -> OpenRequest {
    OpenRequest {
        source: "photos/sample.png".into(),
        template_name: Some("Spring Promo".into()),
        template_aspect: template_aspect.map(str::to_string),
    }
}

fn ready_state_with(image: LoadedImage, template_aspect: Option<&str>) -> State {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let request = state
        .open(open_request(template_aspect))
        .expect("load request");
    state.update(Message::ImageLoaded {
        session: request.session,
        result: Ok(image),
    });
    assert!(state.is_ready());
    state
}

/// 800x600 image; the default viewport yields an 800x600 canvas.
fn ready_state() -> State {
    ready_state_with(solid_image(800, 600, RED), None)
}

fn toolbar(state: &mut State, message: ToolbarMessage) -> Event {
    state.update(Message::Toolbar(message))
}

fn canvas(state: &mut State, message: CanvasMessage) {
    state.update(Message::Canvas(message));
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

#[test]
fn new_editor_is_closed() {
    let state = State::new(EditorSettings::default(), VIEWPORT);
    assert_eq!(state.phase(), &Phase::Closed);
    assert!(!state.is_open());
    assert_eq!(state.history_len(), 0);
    assert_eq!(state.history_index(), None);
    assert!(state.frame().is_none());
}

#[test]
fn open_with_empty_source_reports_load_error() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let request = state.open(OpenRequest {
        source: "   ".into(),
        ..OpenRequest::default()
    });

    assert!(request.is_none());
    assert!(matches!(state.phase(), Phase::Error(EditorError::Load(_))));
}

#[test]
fn open_classifies_source_and_enters_loading() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let request = state
        .open(OpenRequest {
            source: "https://cdn.example.com/banner.jpg".into(),
            ..OpenRequest::default()
        })
        .expect("load request");

    assert_eq!(
        request.source,
        ImageSource::Url("https://cdn.example.com/banner.jpg".into())
    );
    assert_eq!(request.session, state.session());
    assert_eq!(state.phase(), &Phase::Loading);
}

#[test]
fn load_centers_image_and_records_initial_snapshot() {
    let state = ready_state_with(solid_image(400, 300, RED), None);

    assert_eq!(state.canvas_size(), CanvasSize { width: 800, height: 600 });
    assert_eq!(state.transform().position, Point::new(200.0, 150.0));
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.history_index(), Some(0));
    assert!(!state.can_undo());
    assert_eq!(state.render_count(), 1);
    assert!(state.display_handle().is_some());
}

#[test]
fn stale_load_result_is_ignored() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let first = state.open(open_request(None)).expect("first request");
    let second = state.open(open_request(None)).expect("second request");
    assert_ne!(first.session, second.session);

    state.update(Message::ImageLoaded {
        session: first.session,
        result: Ok(solid_image(10, 10, RED)),
    });
    assert_eq!(state.phase(), &Phase::Loading);
    assert!(state.image().is_none());

    state.update(Message::ImageLoaded {
        session: second.session,
        result: Ok(solid_image(20, 10, RED)),
    });
    assert!(state.is_ready());
    assert_eq!(state.image().map(LoadedImage::dimensions), Some((20, 10)));
}

#[test]
fn load_arriving_after_close_is_ignored() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let request = state.open(open_request(None)).expect("load request");
    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Close),
        Event::Closed
    ));

    state.update(Message::ImageLoaded {
        session: request.session,
        result: Ok(solid_image(10, 10, RED)),
    });
    assert_eq!(state.phase(), &Phase::Closed);
    assert!(state.image().is_none());
}

#[test]
fn load_failure_moves_to_error_and_close_recovers() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    let request = state.open(open_request(None)).expect("load request");
    state.update(Message::ImageLoaded {
        session: request.session,
        result: Err(Error::Decode("truncated file".into())),
    });

    match state.phase() {
        Phase::Error(EditorError::Load(message)) => assert!(message.contains("truncated file")),
        other => panic!("expected load error, got {other:?}"),
    }
    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Close),
        Event::Closed
    ));
    assert_eq!(state.phase(), &Phase::Closed);
}

#[test]
fn reset_on_close_clears_everything() {
    let mut state = ready_state();
    state.rotate();
    state.toggle_flip(Axis::X);
    state.start_crop();
    state.is_saving = true;

    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Close),
        Event::Closed
    ));
    state.open(open_request(None)).expect("load request");

    assert_eq!(state.history_len(), 0);
    assert_eq!(state.history_index(), None);
    assert_eq!(state.transform(), &TransformState::default());
    assert!(!state.is_cropping());
    assert!(state.crop_box().is_none());
    assert!(!state.is_saving());
    assert!(state.alert().is_none());
}

#[test]
fn close_event_is_emitted_once() {
    let mut state = ready_state();
    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Close),
        Event::Closed
    ));
    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Close),
        Event::None
    ));
}

// ---------------------------------------------------------------------------
// Transform operations and history
// ---------------------------------------------------------------------------

#[test]
fn reset_round_trip_restores_centered_defaults() {
    let mut state = ready_state_with(solid_image(400, 300, RED), None);
    let initial = *state.transform();

    state.set_scale(2.5);
    state.set_stretch(Axis::Y, 170.0);
    state.set_position(Point::new(-40.0, 12.0));
    state.rotate();
    state.toggle_flip(Axis::X);
    state.toggle_flip(Axis::Y);
    state.reset();

    assert_eq!(state.transform(), &initial);
}

#[test]
fn rotation_wraps_in_both_directions() {
    let mut state = ready_state();
    for _ in 0..4 {
        toolbar(&mut state, ToolbarMessage::RotateClockwise);
    }
    assert_eq!(state.transform().rotation, RotationAngle::ZERO);

    toolbar(&mut state, ToolbarMessage::RotateCounterClockwise);
    assert_eq!(state.transform().rotation.degrees(), 270);
}

#[test]
fn stretch_is_clamped_and_recenters() {
    let mut state = ready_state_with(solid_image(400, 300, RED), None);

    state.set_stretch(Axis::X, 150.0);
    assert!(close(state.transform().stretch_x.value(), 1.5));
    assert_eq!(state.transform().position, Point::new(100.0, 150.0));

    state.set_stretch(Axis::X, 10.0);
    assert!(close(state.transform().stretch_x.value(), 0.5));
    assert_eq!(state.transform().position, Point::new(300.0, 150.0));
}

#[test]
fn scale_is_clamped() {
    let mut state = ready_state();
    state.set_scale(12.0);
    assert!(close(state.transform().scale.value(), 5.0));
    state.set_scale(0.0);
    assert!(close(state.transform().scale.value(), 0.1));
}

#[test]
fn history_is_bounded_and_undo_stops_at_oldest() {
    let mut state = ready_state();
    for _ in 0..60 {
        state.rotate();
    }
    assert_eq!(state.history_len(), 50);
    assert_eq!(state.history_index(), Some(49));

    for _ in 0..50 {
        state.undo();
    }
    assert_eq!(state.history_index(), Some(0));
    assert!(!state.can_undo());
    // Oldest surviving entry is the 11th rotation: 11 * 90 = 990 -> 270.
    assert_eq!(state.transform().rotation.degrees(), 270);
}

#[test]
fn undo_and_redo_are_inverse() {
    let mut state = ready_state();
    let initial = *state.transform();

    state.rotate();
    state.toggle_flip(Axis::Y);
    state.set_scale(1.7);
    let edited = *state.transform();

    for _ in 0..3 {
        toolbar(&mut state, ToolbarMessage::Undo);
    }
    assert_eq!(state.transform(), &initial);

    for _ in 0..3 {
        toolbar(&mut state, ToolbarMessage::Redo);
    }
    assert_eq!(state.transform(), &edited);
    assert!(!state.can_redo());
}

#[test]
fn slider_previews_commit_once_on_release() {
    let mut state = ready_state();

    toolbar(&mut state, ToolbarMessage::ScaleChanged(1.4));
    toolbar(&mut state, ToolbarMessage::ScaleChanged(2.0));
    assert_eq!(state.history_len(), 1);
    assert!(close(state.transform().scale.value(), 2.0));

    toolbar(&mut state, ToolbarMessage::ScaleReleased);
    assert_eq!(state.history_len(), 2);

    toolbar(&mut state, ToolbarMessage::ScaleReleased);
    assert_eq!(state.history_len(), 2);

    toolbar(&mut state, ToolbarMessage::StretchChanged(Axis::Y, 120.0));
    toolbar(&mut state, ToolbarMessage::StretchReleased);
    assert_eq!(state.history_len(), 3);
}

#[test]
fn operations_are_ignored_until_ready() {
    let mut state = State::new(EditorSettings::default(), VIEWPORT);
    state.open(open_request(None)).expect("load request");

    state.rotate();
    state.set_scale(3.0);
    canvas(&mut state, CanvasMessage::Wheel { delta_y: 1.0 });

    assert_eq!(state.transform(), &TransformState::default());
    assert_eq!(state.history_len(), 0);
}

// ---------------------------------------------------------------------------
// Pointer interaction
// ---------------------------------------------------------------------------

#[test]
fn pan_drag_moves_image_and_commits_on_release() {
    let mut state = ready_state_with(solid_image(400, 300, RED), None);

    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(10.0, 10.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(40.0, 30.0)));
    assert!(state.is_dragging());
    assert_eq!(state.transform().position, Point::new(230.0, 170.0));
    assert_eq!(state.history_len(), 1);

    // Leaving the canvas keeps tracking.
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(-90.0, -40.0)));
    assert_eq!(state.transform().position, Point::new(100.0, 100.0));

    canvas(&mut state, CanvasMessage::PointerReleased);
    assert!(!state.is_dragging());
    assert_eq!(state.history_len(), 2);

    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(500.0, 500.0)));
    assert_eq!(state.transform().position, Point::new(100.0, 100.0));
}

#[test]
fn release_without_drag_does_not_commit() {
    let mut state = ready_state();
    canvas(&mut state, CanvasMessage::PointerReleased);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn wheel_zooms_and_commits_immediately() {
    let mut state = ready_state();

    canvas(&mut state, CanvasMessage::Wheel { delta_y: 3.0 });
    assert!(close(state.transform().scale.value(), 0.9));
    assert_eq!(state.history_len(), 2);

    canvas(&mut state, CanvasMessage::Wheel { delta_y: -3.0 });
    assert!(close(state.transform().scale.value(), 0.99));
    assert_eq!(state.history_len(), 3);
}

#[test]
fn wheel_without_vertical_delta_zooms_in() {
    let mut state = ready_state();
    canvas(&mut state, CanvasMessage::Wheel { delta_y: 0.0 });
    assert!(close(state.transform().scale.value(), 1.1));
    assert_eq!(state.history_len(), 2);
}

#[test]
fn wheel_works_in_crop_mode() {
    let mut state = ready_state();
    state.start_crop();
    canvas(&mut state, CanvasMessage::Wheel { delta_y: -1.0 });
    assert!(close(state.transform().scale.value(), 1.1));
}

// ---------------------------------------------------------------------------
// Crop mode
// ---------------------------------------------------------------------------

#[test]
fn start_crop_places_centered_box() {
    let mut state = ready_state();
    toolbar(&mut state, ToolbarMessage::StartCrop);

    assert!(state.is_cropping());
    assert_eq!(state.tool(), ToolMode::Crop);
    assert_eq!(state.crop_box(), Some(CropBox::new(80.0, 60.0, 640.0, 480.0)));
}

#[test]
fn crop_drag_clamps_to_minimum_size_without_history() {
    let mut state = ready_state();
    state.start_crop();

    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(722.0, 538.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(22.0, -162.0)));
    canvas(&mut state, CanvasMessage::PointerReleased);
    assert_eq!(state.crop_box(), Some(CropBox::new(80.0, 60.0, 50.0, 50.0)));
    assert_eq!(state.history_len(), 1);

    state.cancel_crop();
    state.start_crop();
    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(80.0, 60.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(780.0, 760.0)));
    let crop = state.crop_box().expect("crop box");
    assert_eq!((crop.width, crop.height), (50.0, 50.0));
    assert_eq!((crop.right(), crop.bottom()), (720.0, 540.0));
}

#[test]
fn crop_body_drag_moves_box() {
    let mut state = ready_state();
    state.start_crop();

    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(400.0, 300.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(380.0, 310.0)));
    assert_eq!(state.crop_box(), Some(CropBox::new(60.0, 70.0, 640.0, 480.0)));
    // Crop mode never pans the image.
    assert_eq!(state.transform().position, Point::ORIGIN);
}

#[test]
fn press_outside_crop_box_is_ignored() {
    let mut state = ready_state();
    state.start_crop();
    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(5.0, 5.0)));
    assert!(!state.is_dragging());
}

#[test]
fn apply_crop_replaces_image_and_resets_transform() {
    let mut state = ready_state();
    state.rotate();
    state.rotate();
    state.start_crop();
    state.crop_box = Some(CropBox::new(100.0, 100.0, 300.0, 200.0));

    toolbar(&mut state, ToolbarMessage::ApplyCrop);

    let image = state.image().expect("cropped image");
    assert_eq!(image.dimensions(), (300, 200));
    assert_eq!(image.rgba().get_pixel(150, 100).0, RED);
    assert_eq!(state.transform().scale.value(), 1.0);
    assert_eq!(state.transform().rotation, RotationAngle::ZERO);
    assert!(!state.transform().flip_horizontal);
    assert!(!state.is_cropping());
    assert!(state.alert().is_none());
    // The canvas follows the new image aspect.
    assert!((state.canvas_size().ratio() - 1.5).abs() < 0.01);
}

#[test]
fn apply_crop_restarts_history() {
    let mut state = ready_state();
    state.rotate();
    state.set_scale(2.0);
    state.start_crop();
    state.crop_box = Some(CropBox::new(100.0, 100.0, 300.0, 200.0));

    toolbar(&mut state, ToolbarMessage::ApplyCrop);
    let cropped = *state.transform();

    assert_eq!(state.history_len(), 1);
    assert_eq!(state.history_index(), Some(0));
    assert!(!state.can_undo());

    toolbar(&mut state, ToolbarMessage::Undo);
    assert_eq!(*state.transform(), cropped);
    assert_eq!(state.image().map(LoadedImage::dimensions), Some((300, 200)));
}

#[test]
fn crop_drag_stays_inside_canvas() {
    let mut state = ready_state();
    state.start_crop();

    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(720.0, 540.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(2000.0, 2000.0)));
    canvas(&mut state, CanvasMessage::PointerReleased);
    assert_eq!(state.crop_box(), Some(CropBox::new(80.0, 60.0, 720.0, 540.0)));

    canvas(&mut state, CanvasMessage::PointerPressed(Point::new(400.0, 300.0)));
    canvas(&mut state, CanvasMessage::PointerMoved(Point::new(-1000.0, -1000.0)));
    canvas(&mut state, CanvasMessage::PointerReleased);
    assert_eq!(state.crop_box(), Some(CropBox::new(0.0, 0.0, 720.0, 540.0)));
}

#[test]
fn resize_while_cropping_keeps_box_on_canvas() {
    let mut state = ready_state();
    toolbar(&mut state, ToolbarMessage::StartCrop);

    state.update(Message::ViewportResized(Size::new(640.0, 400.0)));

    assert_eq!(state.canvas_size(), CanvasSize { width: 400, height: 300 });
    let crop = state.crop_box().expect("crop box while cropping");
    assert_eq!(crop, CropBox::new(40.0, 30.0, 320.0, 240.0));
    assert!(crop.x >= 0.0 && crop.y >= 0.0);
    assert!(crop.right() <= 400.0 && crop.bottom() <= 300.0);

    toolbar(&mut state, ToolbarMessage::ApplyCrop);

    let image = state.image().expect("cropped image");
    assert_eq!(image.dimensions(), (320, 240));
    assert_eq!(image.rgba().get_pixel(0, 0).0, RED);
    assert_eq!(image.rgba().get_pixel(319, 239).0, RED);
}

#[test]
fn degenerate_crop_raises_alert_and_keeps_state() {
    let mut state = ready_state();
    state.start_crop();
    state.crop_box = Some(CropBox::new(100.0, 100.0, 1.0, 200.0));

    toolbar(&mut state, ToolbarMessage::ApplyCrop);

    assert!(matches!(state.alert(), Some(EditorError::CropValidation(_))));
    assert!(state.is_cropping());
    assert_eq!(state.image().map(LoadedImage::dimensions), Some((800, 600)));

    state.update(Message::DismissAlert);
    assert!(state.alert().is_none());
}

#[test]
fn cancel_crop_leaves_image_untouched() {
    let mut state = ready_state();
    state.start_crop();
    toolbar(&mut state, ToolbarMessage::CancelCrop);

    assert!(!state.is_cropping());
    assert!(state.crop_box().is_none());
    assert_eq!(state.image().map(LoadedImage::dimensions), Some((800, 600)));
}

// ---------------------------------------------------------------------------
// Canvas sizing
// ---------------------------------------------------------------------------

#[test]
fn template_aspect_drives_canvas_ratio() {
    let state = ready_state_with(solid_image(100, 100, RED), Some("9 : 16"));
    assert!((state.canvas_size().ratio() - 9.0 / 16.0).abs() < 0.01);

    let state = ready_state_with(solid_image(100, 100, RED), Some("4x3"));
    assert!((state.canvas_size().ratio() - 4.0 / 3.0).abs() < 0.01);

    let state = ready_state_with(solid_image(1000, 500, RED), Some("bogus"));
    assert!((state.canvas_size().ratio() - 2.0).abs() < 0.01);
}

#[test]
fn viewport_resize_recomputes_canvas() {
    let mut state = ready_state();
    state.update(Message::ViewportResized(Size::new(640.0, 400.0)));
    assert_eq!(state.canvas_size(), CanvasSize { width: 400, height: 300 });
}

// ---------------------------------------------------------------------------
// Rendering and saving
// ---------------------------------------------------------------------------

#[test]
fn render_runs_only_when_visible_state_changes() {
    let mut state = ready_state();
    let rendered = state.render_count();

    state.update(Message::DismissAlert);
    assert_eq!(state.render_count(), rendered);

    toolbar(&mut state, ToolbarMessage::Save);
    assert!(state.is_saving());
    assert_eq!(state.render_count(), rendered);

    toolbar(&mut state, ToolbarMessage::RotateClockwise);
    assert_eq!(state.render_count(), rendered + 1);

    toolbar(&mut state, ToolbarMessage::StartCrop);
    assert_eq!(state.render_count(), rendered + 2);
}

#[test]
fn second_save_while_in_flight_is_ignored() {
    let mut state = ready_state();

    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Save),
        Event::SaveRequested(_)
    ));
    assert!(matches!(toolbar(&mut state, ToolbarMessage::Save), Event::None));

    state.update(Message::SaveFinished(Ok(())));
    assert!(!state.is_saving());
    assert!(state.is_open());
    assert!(matches!(
        toolbar(&mut state, ToolbarMessage::Save),
        Event::SaveRequested(_)
    ));
}

#[test]
fn failed_save_raises_export_alert() {
    let mut state = ready_state();
    toolbar(&mut state, ToolbarMessage::Save);
    state.update(Message::SaveFinished(Err("disk full".into())));

    assert!(!state.is_saving());
    assert_eq!(
        state.alert(),
        Some(&EditorError::Export("disk full".into()))
    );
}

#[test]
fn export_payload_excludes_crop_decorations() {
    let mut state = ready_state();
    state.start_crop();

    let Event::SaveRequested(payload) = toolbar(&mut state, ToolbarMessage::Save) else {
        panic!("expected save request");
    };

    assert_eq!((payload.width, payload.height), (800, 600));
    assert!(payload.file_name.starts_with("spring-promo-"));
    assert!(payload.file_name.ends_with(".png"));

    let decoded = image_rs::load_from_memory(&payload.png)
        .expect("valid png")
        .to_rgba8();
    // Inside the darkened mask band and on a handle square.
    assert_eq!(decoded.get_pixel(10, 10).0, RED);
    assert_eq!(decoded.get_pixel(80, 60).0, RED);
}
