// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::ConfigError;

/// Default step multipliers.
///
/// The trailing `0.5` catches the case where the step magnitude lands in the
/// wrong exponent bin because of rounding in the logarithm.
pub const DEFAULT_STEPS: [f64; 4] = [5.0, 2.0, 1.0, 0.5];

/// Configuration for a [`Ticker`](crate::Ticker).
///
/// - `min_ticks`: minimum number of ticks generated for any interval. The
///   maximum is `ceil(min_ticks * max_step_ratio())`, i.e. `5/2 * min_ticks`
///   for the default steps.
/// - `precision`: maximum number of significant digits in a label. When the
///   ticks need more than that (a small range on a large offset, or very
///   large/small values) a shared offset and magnitude are factored out.
/// - `steps`: "round" tick increments at a given magnitude, descending.
/// - `base`: numeric base used to pick step magnitudes and factored
///   offsets/magnitudes. Labels are always rendered in decimal.
#[derive(Clone, Debug, PartialEq)]
pub struct TickerConfig {
    /// Minimum number of ticks in `[a, b)`.
    pub min_ticks: u32,
    /// Maximum number of significant label digits.
    pub precision: u32,
    /// Step multipliers, strictly descending.
    pub steps: Vec<f64>,
    /// Numeric base for step magnitudes.
    pub base: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            min_ticks: 3,
            precision: 3,
            steps: DEFAULT_STEPS.to_vec(),
            base: 10,
        }
    }
}

impl TickerConfig {
    /// Returns this config with `min_ticks` replaced.
    #[must_use]
    pub fn with_min_ticks(mut self, min_ticks: u32) -> Self {
        self.min_ticks = min_ticks;
        self
    }

    /// Returns this config with `precision` replaced.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns this config with the step multipliers replaced.
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<f64>) -> Self {
        self.steps = steps;
        self
    }

    /// Returns this config with `base` replaced.
    #[must_use]
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Largest ratio between consecutive step multipliers.
    ///
    /// This bounds how many more than `min_ticks` ticks can be generated.
    /// The wrap-around from the smallest multiplier to the largest one of the
    /// next lower magnitude counts as well.
    #[must_use]
    pub fn max_step_ratio(&self) -> f64 {
        let mut ratio: f64 = 1.0;
        for pair in self.steps.windows(2) {
            ratio = ratio.max(pair[0] / pair[1]);
        }
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let wrap = last * f64::from(self.base) / first;
            if wrap > 1.0 {
                ratio = ratio.max(wrap);
            }
        }
        ratio
    }

    /// Upper bound on the number of generated ticks.
    #[must_use]
    pub fn max_ticks(&self) -> usize {
        let bound = libm::ceil(f64::from(self.min_ticks) * self.max_step_ratio());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "bound is a small positive integer-valued float"
        )]
        {
            bound as usize
        }
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ticks < 2 {
            return Err(ConfigError::TooFewTicks(self.min_ticks));
        }
        if self.precision == 0 {
            return Err(ConfigError::ZeroPrecision);
        }
        if self.base < 2 {
            return Err(ConfigError::InvalidBase(self.base));
        }
        if self.steps.is_empty() {
            return Err(ConfigError::NoSteps);
        }
        for (i, step) in self.steps.iter().enumerate() {
            if !(step.is_finite() && *step > 0.0) {
                return Err(ConfigError::InvalidStep(i));
            }
            if i > 0 && self.steps[i - 1] <= *step {
                return Err(ConfigError::UnorderedSteps(i));
            }
        }
        if self.steps.iter().all(|step| *step > 1.0) {
            return Err(ConfigError::NoUnitStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn default_is_valid() {
        let config = TickerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_step_ratio(), 2.5);
        assert_eq!(config.max_ticks(), 8);
    }

    #[test]
    fn max_ticks_for_two() {
        let config = TickerConfig::default().with_min_ticks(2);
        assert_eq!(config.max_ticks(), 5);
    }

    #[test]
    fn rejects_bad_values() {
        let base = TickerConfig::default();
        assert_eq!(
            base.clone().with_min_ticks(1).validate(),
            Err(ConfigError::TooFewTicks(1))
        );
        assert_eq!(
            base.clone().with_precision(0).validate(),
            Err(ConfigError::ZeroPrecision)
        );
        assert_eq!(
            base.clone().with_base(1).validate(),
            Err(ConfigError::InvalidBase(1))
        );
        assert_eq!(
            base.clone().with_steps(Vec::new()).validate(),
            Err(ConfigError::NoSteps)
        );
        assert_eq!(
            base.clone().with_steps(vec![5.0, -1.0]).validate(),
            Err(ConfigError::InvalidStep(1))
        );
        assert_eq!(
            base.clone().with_steps(vec![2.0, 5.0, 1.0]).validate(),
            Err(ConfigError::UnorderedSteps(1))
        );
        assert_eq!(
            base.with_steps(vec![5.0, 2.0]).validate(),
            Err(ConfigError::NoUnitStep)
        );
    }
}
