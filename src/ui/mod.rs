// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: parents
//! own the component state, forward messages into `update`, and react to the
//! returned events.
//!
//! - [`image_editor`] - Transform and crop editor with undo/redo and PNG export
//! - [`state`] - Reusable interaction state (drag tracking)

pub mod image_editor;
pub mod state;
