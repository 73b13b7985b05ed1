// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core editing logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Transform model, history, crop geometry and canvas sizing
//!   ([`TransformState`](editing::TransformState), [`HistoryStack`](editing::HistoryStack),
//!   [`CropBox`](editing::CropBox), [`CanvasSize`](editing::CanvasSize))

pub mod editing;
