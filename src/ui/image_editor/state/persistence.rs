// SPDX-License-Identifier: MPL-2.0
//! Save hand-off to the host.

use crate::error::EditorError;
use crate::media::export;
use crate::ui::image_editor::{Event, State};
use chrono::Local;

impl State {
    /// Exports the current frame as PNG and hands it to the host.
    ///
    /// Ignored while a previous save is still in flight.
    pub fn save(&mut self) -> Event {
        if !self.is_ready() {
            return Event::None;
        }
        if self.is_saving {
            tracing::debug!("save already in progress, ignoring request");
            return Event::None;
        }

        match self.export_current_frame() {
            Ok(payload) => {
                tracing::info!(
                    file_name = %payload.file_name,
                    width = payload.width,
                    height = payload.height,
                    "frame exported"
                );
                self.is_saving = true;
                Event::SaveRequested(payload)
            }
            Err(err) => {
                tracing::warn!(%err, "export failed");
                self.alert = Some(err);
                Event::None
            }
        }
    }

    /// Host reply to [`Event::SaveRequested`].
    pub fn save_finished(&mut self, result: Result<(), String>) {
        if !self.is_saving {
            return;
        }
        self.is_saving = false;
        match result {
            Ok(()) => tracing::info!("save completed"),
            Err(message) => {
                tracing::warn!(%message, "save failed");
                self.alert = Some(EditorError::Export(message));
            }
        }
    }

    fn export_current_frame(&mut self) -> Result<export::ExportPayload, EditorError> {
        self.refresh_frame();
        let frame = self
            .frame
            .as_ref()
            .ok_or_else(|| EditorError::Export("nothing rendered".into()))?;
        let rgba = frame
            .image_rgba()
            .map_err(|err| EditorError::Export(err.to_string()))?;
        export::export_frame(&rgba, self.template_name.as_deref(), Local::now())
            .map_err(|err| EditorError::Export(err.to_string()))
    }
}
