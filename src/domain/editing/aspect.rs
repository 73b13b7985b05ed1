// SPDX-License-Identifier: MPL-2.0
//! Aspect-ratio parsing and canvas sizing.
//!
//! The canvas takes the template aspect when one is given and parseable,
//! otherwise the image's natural aspect, otherwise the fallback (16:9). It
//! is then fitted inside a fraction of the viewport.

use super::transform::Size;

/// A strictly positive width:height ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    width: f32,
    height: f32,
}

impl AspectRatio {
    /// Builds a ratio from two positive, finite parts.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Parses `"W:H"` (also `WxH` / `WXH`), tolerating surrounding whitespace.
    ///
    /// Each part is digits with an optional decimal fraction.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let separator = trimmed.find([':', 'x', 'X'])?;
        let (left, right) = trimmed.split_at(separator);
        let right = &right[1..];
        Self::new(parse_part(left)?, parse_part(right)?)
    }

    /// Ratio of the given pixel dimensions.
    #[must_use]
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        // Pixel counts comfortably fit in f32 precision for ratio purposes.
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (width as f32, height as f32);
        Self::new(width, height)
    }

    /// Width divided by height.
    #[must_use]
    pub fn value(self) -> f32 {
        self.width / self.height
    }

    /// Picks the template aspect, then the image aspect, then `fallback`.
    ///
    /// A fallback that does not parse degrades to 16:9.
    #[must_use]
    pub fn resolve(template: Option<&str>, image: Option<(u32, u32)>, fallback: &str) -> Self {
        template
            .and_then(Self::parse)
            .or_else(|| image.and_then(|(w, h)| Self::from_dimensions(w, h)))
            .or_else(|| Self::parse(fallback))
            .unwrap_or(Self {
                width: 16.0,
                height: 9.0,
            })
    }
}

fn parse_part(part: &str) -> Option<f32> {
    let part = part.trim();
    let (integer, fraction) = match part.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (part, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(integer) || fraction.is_some_and(|f| !digits(f)) {
        return None;
    }
    part.parse().ok()
}

/// Drawing surface size in device pixels; both sides are at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Fits `aspect` inside `viewport` scaled by the width/height budget fractions.
    #[must_use]
    pub fn fit(aspect: AspectRatio, viewport: Size, width_fraction: f32, height_fraction: f32) -> Self {
        let max_width = (viewport.width * width_fraction).max(1.0);
        let max_height = (viewport.height * height_fraction).max(1.0);
        let ratio = aspect.value();

        let (width, height) = if max_width / ratio <= max_height {
            (max_width, max_width / ratio)
        } else {
            (max_height * ratio, max_height)
        };

        // Rounded and clamped to >= 1; the budget bounds the upper end.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (
            width.round().max(1.0) as u32,
            height.round().max(1.0) as u32,
        );
        Self { width, height }
    }

    #[must_use]
    pub fn as_size(self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (self.width as f32, self.height as f32);
        Size::new(width, height)
    }

    #[must_use]
    pub fn ratio(self) -> f32 {
        let size = self.as_size();
        size.width / size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size {
        width: 1600.0,
        height: 1000.0,
    };

    fn close(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn parses_colon_with_whitespace() {
        let aspect = AspectRatio::parse("9 : 16").expect("valid aspect");
        assert!(close(aspect.value(), 9.0 / 16.0, 1e-6));
    }

    #[test]
    fn parses_x_separators_and_decimals() {
        let aspect = AspectRatio::parse("4x3").expect("valid aspect");
        assert!(close(aspect.value(), 4.0 / 3.0, 1e-6));
        let aspect = AspectRatio::parse("  2.35X1 ").expect("valid aspect");
        assert!(close(aspect.value(), 2.35, 1e-6));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["bogus", "", ":", "16:", "0:9", "-4:3", "4:3:2", "1e3:2", "4.:3", "a:b"] {
            assert!(AspectRatio::parse(input).is_none(), "{input:?} should not parse");
        }
    }

    #[test]
    fn resolve_prefers_template_then_image_then_fallback() {
        let aspect = AspectRatio::resolve(Some("1:1"), Some((1000, 500)), "16:9");
        assert!(close(aspect.value(), 1.0, 1e-6));

        let aspect = AspectRatio::resolve(Some("bogus"), Some((1000, 500)), "16:9");
        assert!(close(aspect.value(), 2.0, 1e-6));

        let aspect = AspectRatio::resolve(None, None, "16:9");
        assert!(close(aspect.value(), 16.0 / 9.0, 1e-6));

        let aspect = AspectRatio::resolve(None, Some((0, 10)), "nonsense");
        assert!(close(aspect.value(), 16.0 / 9.0, 1e-6));
    }

    #[test]
    fn fit_respects_budget_for_wide_aspect() {
        let aspect = AspectRatio::parse("16:9").expect("valid aspect");
        let canvas = CanvasSize::fit(aspect, VIEWPORT, 0.7, 0.75);
        assert_eq!(canvas.width, 1120);
        assert_eq!(canvas.height, 630);
    }

    #[test]
    fn fit_respects_budget_for_tall_aspect() {
        let aspect = AspectRatio::parse("9 : 16").expect("valid aspect");
        let canvas = CanvasSize::fit(aspect, VIEWPORT, 0.7, 0.75);
        assert_eq!(canvas.height, 750);
        assert!(canvas.width as f32 <= 1600.0 * 0.7);
        assert!(close(canvas.ratio(), 9.0 / 16.0, 0.01));
    }

    #[test]
    fn fit_never_produces_empty_canvas() {
        let aspect = AspectRatio::parse("1000:1").expect("valid aspect");
        let canvas = CanvasSize::fit(aspect, Size::new(0.0, 0.0), 0.7, 0.75);
        assert!(canvas.width >= 1);
        assert!(canvas.height >= 1);
    }
}
