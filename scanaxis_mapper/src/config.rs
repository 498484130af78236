// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::MapperError;

/// Tunables for an [`AxisMapper`](crate::AxisMapper).
///
/// The span limits bound the visible real span (`viewport_width / scale`).
/// Without a lower limit, repeated zooming in eventually makes the reals at
/// both groove ends round to the same float, and the two handles collapse
/// onto one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperConfig {
    /// Real value centered on the first layout pass.
    pub default_origin: f64,
    /// Scale (pixels per real unit) used on the first layout pass.
    pub default_scale: f64,
    /// Fraction of the viewport the handle span occupies after
    /// [`zoom_to_fit`](crate::AxisMapper::zoom_to_fit).
    pub fit_fraction: f64,
    /// Smallest visible span relative to the magnitude of the center value.
    pub min_relative_span: f64,
    /// Smallest visible span in real units.
    pub min_span: f64,
    /// Largest visible span in real units.
    pub max_span: f64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_origin: 0.0,
            default_scale: 1.0,
            fit_fraction: 1.0 / 3.0,
            min_relative_span: 1e-9,
            min_span: 1e-200,
            max_span: 1e200,
        }
    }
}

impl MapperConfig {
    /// Returns this config with the first-layout origin and scale replaced.
    #[must_use]
    pub fn with_default_view(mut self, origin: f64, scale: f64) -> Self {
        self.default_origin = origin;
        self.default_scale = scale;
        self
    }

    /// Returns this config with `fit_fraction` replaced.
    #[must_use]
    pub fn with_fit_fraction(mut self, fit_fraction: f64) -> Self {
        self.fit_fraction = fit_fraction;
        self
    }

    /// Returns this config with the span limits replaced.
    #[must_use]
    pub fn with_span_limits(mut self, min_relative: f64, min: f64, max: f64) -> Self {
        self.min_relative_span = min_relative;
        self.min_span = min;
        self.max_span = max;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), MapperError> {
        if !self.default_origin.is_finite() {
            return Err(MapperError::InvalidConfig("default_origin must be finite"));
        }
        if !(self.default_scale.is_finite() && self.default_scale > 0.0) {
            return Err(MapperError::InvalidConfig(
                "default_scale must be positive and finite",
            ));
        }
        if !(self.fit_fraction > 0.0 && self.fit_fraction <= 1.0) {
            return Err(MapperError::InvalidConfig("fit_fraction must be in (0, 1]"));
        }
        if !(self.min_relative_span.is_finite() && self.min_relative_span >= 0.0) {
            return Err(MapperError::InvalidConfig(
                "min_relative_span must be non-negative and finite",
            ));
        }
        if !(self.min_span > 0.0 && self.min_span <= self.max_span && self.max_span.is_finite()) {
            return Err(MapperError::InvalidConfig(
                "span limits must satisfy 0 < min_span <= max_span < inf",
            ));
        }
        Ok(())
    }

    /// Clamps `scale` so the visible span around `center` stays within the
    /// configured limits for a viewport of `width` pixels.
    pub(crate) fn clamp_scale(&self, scale: f64, center: f64, width: f64) -> f64 {
        let min_span = self.min_span.max(self.min_relative_span * center.abs());
        let max_span = self.max_span.max(min_span);
        scale.clamp(width / max_span, width / min_span)
    }
}

#[cfg(test)]
mod tests {
    use super::MapperConfig;
    use crate::MapperError;

    #[test]
    fn default_is_valid() {
        assert_eq!(MapperConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = MapperConfig::default();
        assert!(matches!(
            base.with_fit_fraction(0.0).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_fit_fraction(1.5).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_default_view(0.0, 0.0).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_default_view(f64::NAN, 1.0).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_span_limits(1e-9, 10.0, 1.0).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            base.with_span_limits(-1.0, 1e-9, 1.0).validate(),
            Err(MapperError::InvalidConfig(_))
        ));
    }

    #[test]
    fn clamp_scale_limits_span() {
        let config = MapperConfig::default().with_span_limits(1e-6, 1e-3, 1e3);
        // Visible span 100 / 1e9 is below the absolute minimum.
        assert_eq!(config.clamp_scale(1e9, 0.0, 100.0), 100.0 / 1e-3);
        // Around 1e6 the relative limit (1.0) dominates.
        assert_eq!(config.clamp_scale(1e9, 1e6, 100.0), 100.0);
        assert_eq!(config.clamp_scale(1e-9, 0.0, 100.0), 100.0 / 1e3);
        assert_eq!(config.clamp_scale(2.0, 0.0, 100.0), 2.0);
    }
}
