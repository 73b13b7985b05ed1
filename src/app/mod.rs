// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts the image editor in a single window.
//!
//! The `App` owns the editor state and performs the side effects the editor
//! asks for: running image loads, writing exported PNGs to the output
//! directory and closing the window once the editor is dismissed.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::defaults::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::domain::editing::Size;
use crate::media;
use crate::ui::image_editor::{self, Event, LoadRequest, State as ImageEditorState};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const APP_NAME: &str = "IcedCrop";
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    editor: ImageEditorState,
    output_dir: PathBuf,
    /// Where the most recent save landed.
    last_saved: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor", &self.editor)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_task(request: LoadRequest) -> Task<Message> {
    let LoadRequest { session, source } = request;
    Task::perform(media::load(source), move |result| {
        Message::Editor(image_editor::Message::ImageLoaded { session, result })
    })
}

impl App {
    /// Creates the editor and starts loading the requested image.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(warning) = &flags.config_warning {
            tracing::warn!(%warning, "using default configuration");
        }

        let mut editor = ImageEditorState::new(
            flags.settings,
            Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        );
        let task = editor.open(flags.request).map_or_else(Task::none, load_task);

        let app = Self {
            editor,
            output_dir: flags.output_dir,
            last_saved: None,
        };
        (app, task)
    }

    #[must_use]
    pub fn editor(&self) -> &ImageEditorState {
        &self.editor
    }

    #[must_use]
    pub fn last_saved(&self) -> Option<&PathBuf> {
        self.last_saved.as_ref()
    }

    pub fn title(&self) -> String {
        match self.editor.template_name() {
            Some(name) if !name.trim().is_empty() => format!("{name} - {APP_NAME}"),
            _ => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(editor_message) => {
                let event = self.editor.update(editor_message);
                self.handle_editor_event(event)
            }
            Message::WindowResized(size) => {
                self.editor
                    .update(image_editor::Message::ViewportResized(Size::new(
                        size.width,
                        size.height,
                    )));
                Task::none()
            }
            Message::SaveCompleted(result) => {
                let reply = match result {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "image written");
                        self.last_saved = Some(path);
                        Ok(())
                    }
                    Err(message) => Err(message),
                };
                self.editor
                    .update(image_editor::Message::SaveFinished(reply));
                Task::none()
            }
        }
    }

    fn handle_editor_event(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::None => Task::none(),
            Event::Closed => {
                tracing::info!("editor closed, exiting");
                iced::exit()
            }
            Event::SaveRequested(payload) => {
                let dir = self.output_dir.clone();
                Task::perform(
                    async move {
                        payload
                            .write_to_dir(&dir)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    Message::SaveCompleted,
                )
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        image_editor::view(&self.editor).map(Message::Editor)
    }
}
