// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::MapperError;

/// One-dimensional affine map from the real domain to viewport pixels.
///
/// `pixel = real * scale + translate`. The transform is a plain value: every
/// zoom, resize, pan or fit builds a new one through [`recenter_transform`]
/// and replaces the old one wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransform {
    scale: f64,
    translate: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AxisTransform {
    /// Creates a transform from its raw parts.
    ///
    /// No validation is done; a zero `scale` gives a singular transform
    /// (see [`AxisTransform::is_invertible`]).
    #[must_use]
    pub const fn new(scale: f64, translate: f64) -> Self {
        Self { scale, translate }
    }

    /// The identity transform (`scale = 1`, `translate = 0`).
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Pixels per real unit.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixel position of real value `0`.
    #[must_use]
    pub const fn translate(&self) -> f64 {
        self.translate
    }

    /// Maps a real value to a pixel coordinate.
    #[must_use]
    pub fn real_to_pixel(&self, real: f64) -> f64 {
        real * self.scale + self.translate
    }

    /// Maps a pixel coordinate back to a real value.
    ///
    /// Only meaningful when [`AxisTransform::is_invertible`] holds.
    #[must_use]
    pub fn pixel_to_real(&self, pixel: f64) -> f64 {
        (pixel - self.translate) / self.scale
    }

    /// Returns `true` if the transform can be inverted in `f64`.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.scale != 0.0
            && self.scale.is_finite()
            && self.translate.is_finite()
            && (1.0 / self.scale).is_finite()
    }

    /// Returns the inverse transform (pixel to real), if any.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }
        let scale = 1.0 / self.scale;
        Some(Self::new(scale, -self.translate * scale))
    }
}

/// Builds the transform that maps `target_real` to the viewport center.
///
/// This is the only place a transform is derived from user intent; the
/// mapper's zoom, resize, pan and fit operations all go through it so that
/// `scale` and `translate` can never drift apart.
///
/// ```
/// use scanaxis_mapper::recenter_transform;
///
/// let t = recenter_transform(5.0, 10.0, 800.0).unwrap();
/// assert_eq!(t.real_to_pixel(5.0), 400.0);
/// assert_eq!(t.scale(), 10.0);
/// ```
pub fn recenter_transform(
    target_real: f64,
    target_scale: f64,
    viewport_width: f64,
) -> Result<AxisTransform, MapperError> {
    if !(viewport_width.is_finite() && viewport_width > 0.0) {
        return Err(MapperError::InvalidViewport {
            width: viewport_width,
        });
    }
    if !(target_scale.is_finite() && target_scale > 0.0) {
        return Err(MapperError::InvalidScale {
            scale: target_scale,
        });
    }
    if !target_real.is_finite() {
        return Err(MapperError::NonFinite);
    }
    let translate = viewport_width * 0.5 - target_real * target_scale;
    if !translate.is_finite() {
        return Err(MapperError::NonFinite);
    }
    Ok(AxisTransform::new(target_scale, translate))
}
