// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for transform values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Uniform zoom bounds (0.1x to 5.0x).
pub mod scale_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.1;
    /// Maximum scale factor.
    pub const MAX: f32 = 5.0;
    /// Default scale factor.
    pub const DEFAULT: f32 = 1.0;
    /// Multiplier applied by one zoom-in step (wheel up).
    pub const ZOOM_IN_FACTOR: f32 = 1.1;
    /// Multiplier applied by one zoom-out step (wheel down).
    pub const ZOOM_OUT_FACTOR: f32 = 0.9;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Uniform image scale, guaranteed to be within valid range (0.1x–5.0x).
///
/// Independent of the per-axis [`StretchFactor`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default scale.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(scale_bounds::MIN, scale_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale multiplied by `factor`, clamped.
    #[must_use]
    pub fn multiplied(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    /// One zoom-in step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.multiplied(scale_bounds::ZOOM_IN_FACTOR)
    }

    /// One zoom-out step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        self.multiplied(scale_bounds::ZOOM_OUT_FACTOR)
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// Stretch Bounds
// =============================================================================

/// Per-axis stretch bounds, expressed in percent (50% to 200%).
pub mod stretch_bounds {
    /// Minimum stretch percentage.
    pub const MIN_PERCENT: f32 = 50.0;
    /// Maximum stretch percentage.
    pub const MAX_PERCENT: f32 = 200.0;
    /// Default stretch percentage.
    pub const DEFAULT_PERCENT: f32 = 100.0;
}

// =============================================================================
// StretchFactor
// =============================================================================

/// Independent axis scaling ("image width/height %"), guaranteed to be
/// within 0.5x–2.0x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchFactor(f32);

impl StretchFactor {
    /// Creates a stretch factor from a percentage, clamping to 50%–200%.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        let percent = if percent.is_finite() {
            percent.clamp(stretch_bounds::MIN_PERCENT, stretch_bounds::MAX_PERCENT)
        } else {
            stretch_bounds::DEFAULT_PERCENT
        };
        Self(percent / 100.0)
    }

    /// Returns the factor (e.g., 150% → 1.5).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the factor as a percentage.
    #[must_use]
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for StretchFactor {
    fn default() -> Self {
        Self(stretch_bounds::DEFAULT_PERCENT / 100.0)
    }
}

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation angle in 90° increments.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always one of: 0°, 90°, 180°, or 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    ///
    /// Any value is normalized to the nearest lower 90° increment,
    /// then wrapped to 0-270° range.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° clockwise.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// Rotates 90° counter-clockwise.
    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self((self.0 + 270) % 360)
    }

    /// Returns true if the angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }
}

/// Image axis targeted by stretch and flip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (width).
    X,
    /// Vertical axis (height).
    Y,
}

// =============================================================================
// Tests
// =============================================================================
