// SPDX-License-Identifier: MPL-2.0
//! Raster handling for the editor: loading, rendering, cropping and export.

pub mod crop;
pub mod export;
pub mod image;
pub mod render;

pub use export::{export_frame, ExportPayload};
pub use image::{load, ImageSource, LoadedImage};
pub use render::{Decorations, RenderedFrame, Renderer};
