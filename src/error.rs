// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! [`Error`] covers infrastructure failures (I/O, decoding, networking,
//! configuration, rendering, encoding). [`EditorError`] is the user-facing
//! taxonomy the editor surfaces in its error panel or alert.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("SVG Error: {0}")]
    Svg(String),
    #[error("HTTP Error: {0}")]
    Http(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Render Error: {0}")]
    Render(String),
    #[error("Encode Error: {0}")]
    Encode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported to the user by the editor.
///
/// None of these are fatal: every variant leaves the editor in an
/// interactive state the user can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Source missing, unreadable, or not decodable.
    #[error("Unable to load image: {0}")]
    Load(String),
    /// Crop requested with a degenerate box.
    #[error("Invalid crop area: {0}")]
    CropValidation(String),
    /// The extracted crop pixels could not be turned into an image.
    #[error("Unable to process cropped image: {0}")]
    CropDecode(String),
    /// Encoding the frame or handing it to the host failed.
    #[error("Unable to save image: {0}")]
    Export(String),
}

impl EditorError {
    /// Short title used for alert headers.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::Load(_) => "Load failed",
            EditorError::CropValidation(_) => "Invalid crop",
            EditorError::CropDecode(_) => "Crop failed",
            EditorError::Export(_) => "Save failed",
        }
    }
}

impl From<Error> for EditorError {
    fn from(err: Error) -> Self {
        EditorError::Load(err.to_string())
    }
}
