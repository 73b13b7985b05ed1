// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for configurable
//! defaults. Hard value-object bounds (scale, stretch) live with their
//! newtypes in [`crate::domain::editing`].
//!
//! # Categories
//!
//! - **History**: Undo/redo capacity
//! - **Crop**: Crop box sizing and handle hit-testing
//! - **Canvas**: Viewport budget used to size the drawing surface

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of snapshots kept in the undo history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Minimum accepted history capacity from the config file.
pub const MIN_HISTORY_CAPACITY: usize = 2;

/// Maximum accepted history capacity from the config file.
pub const MAX_HISTORY_CAPACITY: usize = 500;

// ==========================================================================
// Crop Defaults
// ==========================================================================

/// Minimum crop box side length in canvas pixels.
pub const DEFAULT_MIN_CROP_SIZE: f32 = 50.0;

/// Side length of the square corner handles, also used as hit tolerance.
pub const DEFAULT_CROP_HANDLE_SIZE: f32 = 10.0;

/// Fraction of the canvas covered by a freshly created crop box.
pub const DEFAULT_CROP_COVERAGE: f32 = 0.8;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Fraction of the viewport width available to the canvas.
pub const DEFAULT_VIEWPORT_WIDTH_FRACTION: f32 = 0.70;

/// Fraction of the viewport height available to the canvas.
pub const DEFAULT_VIEWPORT_HEIGHT_FRACTION: f32 = 0.75;

/// Aspect ratio used when neither the template nor the image provides one.
pub const FALLBACK_ASPECT: &str = "16:9";

/// Viewport size assumed before the host reports a real window size.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;

/// Viewport size assumed before the host reports a real window size.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "iced_crop=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);

    assert!(DEFAULT_MIN_CROP_SIZE > 0.0);
    assert!(DEFAULT_CROP_HANDLE_SIZE > 0.0);
    assert!(DEFAULT_CROP_COVERAGE > 0.0);
    assert!(DEFAULT_CROP_COVERAGE <= 1.0);

    assert!(DEFAULT_VIEWPORT_WIDTH_FRACTION > 0.0);
    assert!(DEFAULT_VIEWPORT_WIDTH_FRACTION <= 1.0);
    assert!(DEFAULT_VIEWPORT_HEIGHT_FRACTION > 0.0);
    assert!(DEFAULT_VIEWPORT_HEIGHT_FRACTION <= 1.0);
};
