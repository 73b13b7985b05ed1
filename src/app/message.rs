// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::EditorSettings;
use crate::ui::image_editor::{self, OpenRequest};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(image_editor::Message),
    /// Main window resized (logical pixels).
    WindowResized(iced::Size),
    /// Result of writing an exported image to disk.
    SaveCompleted(Result<PathBuf, String>),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// What to open at startup.
    pub request: OpenRequest,
    /// Resolved `[editor]` settings.
    pub settings: EditorSettings,
    /// Directory saved images are written to.
    pub output_dir: PathBuf,
    /// Warning produced while loading the config file, if any.
    pub config_warning: Option<String>,
}
