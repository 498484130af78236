// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// The slider widget an [`AxisMapper`](crate::AxisMapper) is attached to.
///
/// The host owns the integer range bounds, the groove geometry and the
/// viewport size. The mapper queries them on every conversion and never
/// caches them, since the GUI layer may change them at any time.
///
/// The default [`range_to_pixel`](SliderHost::range_to_pixel) and
/// [`pixel_to_range`](SliderHost::pixel_to_range) implement the usual linear
/// slider mapping (groove start is `min`, groove end is `max`, positions are
/// rounded and clamped). Hosts with a different mapping override both.
pub trait SliderHost {
    /// Inclusive integer bounds `(min, max)` of the slider range.
    fn range_bounds(&self) -> (i32, i32);

    /// Usable groove span in viewport pixels.
    fn groove(&self) -> Range<f64>;

    /// Current viewport width in pixels.
    fn viewport_width(&self) -> f64;

    /// Pixel position of the range value `value`.
    fn range_to_pixel(&self, value: i32) -> f64 {
        let (min, max) = self.range_bounds();
        let groove = self.groove();
        if max <= min {
            return groove.start;
        }
        let span = f64::from(max) - f64::from(min);
        let t = (f64::from(value) - f64::from(min)) / span;
        groove.start + t * (groove.end - groove.start)
    }

    /// Range value at pixel position `pixel`, rounded to the nearest integer
    /// and clamped to the range bounds.
    fn pixel_to_range(&self, pixel: f64) -> i32 {
        let (min, max) = self.range_bounds();
        let groove = self.groove();
        let len = groove.end - groove.start;
        if max <= min || len == 0.0 || pixel.is_nan() {
            return min;
        }
        let span = f64::from(max) - f64::from(min);
        let value = f64::from(min) + (pixel - groove.start) / len * span;
        let value = libm::round(value).clamp(f64::from(min), f64::from(max));
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is integral and clamped to i32 bounds"
        )]
        {
            value as i32
        }
    }
}

/// A [`SliderHost`] with fixed geometry.
///
/// Useful for headless callers and tests; GUI code normally implements
/// [`SliderHost`] on its own widget state.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedSlider {
    /// Inclusive range bounds.
    pub bounds: (i32, i32),
    /// Groove span in pixels.
    pub groove: Range<f64>,
    /// Viewport width in pixels.
    pub viewport_width: f64,
}

impl FixedSlider {
    /// Creates a slider whose groove spans the whole viewport.
    #[must_use]
    pub fn new(bounds: (i32, i32), viewport_width: f64) -> Self {
        Self {
            bounds,
            groove: 0.0..viewport_width,
            viewport_width,
        }
    }

    /// Returns this slider with the groove replaced.
    #[must_use]
    pub fn with_groove(mut self, groove: Range<f64>) -> Self {
        self.groove = groove;
        self
    }
}

impl SliderHost for FixedSlider {
    fn range_bounds(&self) -> (i32, i32) {
        self.bounds
    }

    fn groove(&self) -> Range<f64> {
        self.groove.clone()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}
