// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for the transform/crop editor:
//! - [`ZoomScale`], [`StretchFactor`], [`RotationAngle`]: clamped transform values
//! - [`TransformState`]: how the loaded image maps onto the canvas
//! - [`HistoryStack`]: bounded linear undo/redo log
//! - [`CropBox`]: crop rectangle, handle hit-testing and drag edits
//! - [`AspectRatio`], [`CanvasSize`]: canvas sizing

pub mod aspect;
pub mod crop;
pub mod history;
pub mod newtypes;
pub mod transform;

pub use aspect::{AspectRatio, CanvasSize};
pub use crop::{CropBox, CropHandle};
pub use history::{HistoryEntry, HistoryStack};
pub use newtypes::{Axis, RotationAngle, StretchFactor, ZoomScale};
pub use transform::{Point, Size, TransformState};
