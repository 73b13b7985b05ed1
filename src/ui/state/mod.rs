// SPDX-License-Identifier: MPL-2.0
//! UI state shared by editor components.

pub mod drag;

pub use drag::DragState;
