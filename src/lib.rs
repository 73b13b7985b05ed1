// SPDX-License-Identifier: MPL-2.0
//! `iced_crop` is an interactive image transform and crop editor built with
//! the Iced GUI framework.
//!
//! The editor component in [`ui::image_editor`] scales, stretches, rotates,
//! flips and pans a raster on a fixed-aspect canvas, crops it in place with
//! undo/redo history, and exports the result as PNG. [`app`] hosts it in a
//! desktop window.

#![doc(html_root_url = "https://docs.rs/iced_crop/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
