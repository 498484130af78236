// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::TickerConfig;
use crate::error::{ConfigError, TickError};
use crate::format::{self, LabelFormat};
use crate::math::{floor_log, powi};

/// Smallest step, in units of `f64::EPSILON * max(|a|, |b|)`, that still
/// yields distinct ticks with distinct labels.
const MIN_STEP_RESOLUTION: f64 = 64.0;

/// Largest tick index (`a / step`) for which ticks stay distinct floats.
const MAX_TICK_INDEX: f64 = 4_503_599_627_370_496.0; // 2^52

/// Tick generator and label formatter for a single numeric axis.
///
/// A `Ticker` is immutable configuration; every method is a pure function of
/// that configuration and its arguments.
///
/// ```
/// use scanaxis_ticker::{Ticker, TickerConfig};
///
/// let ticker = Ticker::new(TickerConfig::default().with_min_ticks(2)).unwrap();
/// assert_eq!(ticker.ticks(0.0, 1.0).unwrap(), [0.0, 0.5]);
///
/// let out = ticker.generate(1_000_000.0, 1_000_000.5).unwrap();
/// assert_eq!(out.prefix, "1e6 + ");
/// assert_eq!(out.labels, ["0.0", "0.2", "0.4"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    config: TickerConfig,
    base: f64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            config: TickerConfig::default(),
            base: 10.0,
        }
    }
}

/// Ticks, shared prefix and per-tick labels for one interval.
///
/// Each label is rendered relative to the prefix: the displayed value of
/// tick `i` is `offset + magnitude × labels[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabels {
    /// Tick values, strictly increasing, within `[a, b)`.
    pub ticks: Vec<f64>,
    /// Shared `"offset + magnitude × "` prefix; empty when neither applies.
    pub prefix: String,
    /// One label per tick, pairwise distinct.
    pub labels: Vec<String>,
    /// Offset factored out of all ticks (`0` when none).
    pub offset: f64,
    /// Magnitude factored out of all ticks (`1` when none).
    pub magnitude: f64,
    /// Spacing between consecutive ticks.
    pub step: f64,
}

impl TickLabels {
    /// Iterates `(tick, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.ticks
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }

    /// Number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns `true` if there are no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl Ticker {
    /// Creates a ticker after validating `config`.
    pub fn new(config: TickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let base = f64::from(config.base);
        Ok(Self { config, base })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TickerConfig {
        &self.config
    }

    /// Returns the recommended step for an interval of size `width`.
    ///
    /// The step is the largest `m · base^e` (with `m` taken from the
    /// configured multipliers) not exceeding `width / min_ticks`, so at least
    /// `min_ticks` steps fit into `width`.
    pub fn step(&self, width: f64) -> Result<f64, TickError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TickError::InvalidWidth { width });
        }
        let raw = width / f64::from(self.config.min_ticks);
        let magnitude = powi(self.base, floor_log(raw, self.base));
        let mut step = magnitude * self.config.steps[self.config.steps.len() - 1];
        for m in &self.config.steps {
            let candidate = m * magnitude;
            if candidate <= raw {
                step = candidate;
                break;
            }
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(TickError::InvalidWidth { width });
        }
        Ok(step)
    }

    /// Returns the recommended tick values for the interval `[a, b)`.
    ///
    /// Ticks are `index * step` for consecutive integer indices, each
    /// computed directly rather than accumulated. An interval whose step is
    /// too fine to resolve at its position is [`TickError::Unrepresentable`].
    pub fn ticks(&self, a: f64, b: f64) -> Result<Vec<f64>, TickError> {
        self.ticks_with_step(a, b).map(|(ticks, _)| ticks)
    }

    fn ticks_with_step(&self, a: f64, b: f64) -> Result<(Vec<f64>, f64), TickError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(TickError::NonFinite { a, b });
        }
        if a >= b {
            return Err(TickError::EmptyInterval { a, b });
        }
        let width = b - a;
        if !width.is_finite() {
            return Err(TickError::Unrepresentable { a, b });
        }
        let step = self
            .step(width)
            .map_err(|_| TickError::Unrepresentable { a, b })?;

        let scale = a.abs().max(b.abs());
        if step < MIN_STEP_RESOLUTION * f64::EPSILON * scale {
            return Err(TickError::Unrepresentable { a, b });
        }

        // Shift the window down by one ulp of its bounds. Its width is kept,
        // and a tick that only misses `a` by rounding is still included.
        let shift = f64::EPSILON * scale;
        let (lo, hi) = (a - shift, b - shift);

        let mut index = libm::ceil(lo / step);
        if !(index.abs() < MAX_TICK_INDEX) {
            return Err(TickError::Unrepresentable { a, b });
        }
        if index * step < lo {
            index += 1.0;
        } else if (index - 1.0) * step >= lo {
            index -= 1.0;
        }
        // `+ 0.0` turns a negative zero start into a positive one.
        let a0 = index * step + 0.0;

        let limit = self.config.max_ticks();
        let mut ticks = Vec::with_capacity(limit);
        let mut i = 0_u32;
        loop {
            let tick = a0 + f64::from(i) * step;
            if tick >= hi {
                break;
            }
            if ticks.last().is_some_and(|last| *last >= tick) || ticks.len() >= limit {
                return Err(TickError::Unrepresentable { a, b });
            }
            ticks.push(tick);
            i += 1;
        }
        if ticks.len() < 2 {
            return Err(TickError::Unrepresentable { a, b });
        }
        Ok((ticks, step))
    }

    /// Returns the offset to factor out of ticks starting at `first`, `second`.
    ///
    /// The offset is non-zero only when the ticks' leading digits span at
    /// least `precision` more orders of magnitude than their spacing. It is
    /// then the largest multiple of `base^(e_step + precision - 1)` not
    /// exceeding `first`, so the rebased ticks keep fewer than `precision`
    /// digits above the spacing.
    #[must_use]
    pub fn offset(&self, first: f64, second: f64) -> f64 {
        self.offset_with_step(first, second - first)
    }

    fn offset_with_step(&self, first: f64, step: f64) -> f64 {
        if first == 0.0 || !(step.is_finite() && step > 0.0) {
            return 0.0;
        }
        let precision = self.precision();
        let lead = floor_log(first.abs(), self.base);
        let spacing = floor_log(step, self.base);
        if lead - spacing < precision {
            return 0.0;
        }
        let unit = powi(self.base, spacing + precision - 1);
        let offset = libm::floor(first / unit) * unit;
        tracing::trace!(first, step, offset, "extracted tick offset");
        offset
    }

    /// Returns the magnitude to factor out of ticks ranging over `a..=b`.
    ///
    /// Numbers whose exponent lies strictly within `±precision` (and whose
    /// spacing is no finer than `base^-precision`) are shown as is; larger or
    /// smaller ones share a `base^e` multiplier so labels stay short and
    /// avoid scientific notation.
    #[must_use]
    pub fn magnitude(&self, a: f64, b: f64, step: f64) -> f64 {
        let v = a.abs().max(b.abs());
        if !(v.is_finite() && v > 0.0) {
            return 1.0;
        }
        let precision = self.precision();
        let exp = floor_log(v, self.base);
        let spacing = if step.is_finite() && step > 0.0 {
            floor_log(step, self.base)
        } else {
            exp
        };
        if -precision < exp && exp < precision && spacing > -precision {
            return 1.0;
        }
        let magnitude = powi(self.base, exp);
        tracing::trace!(a, b, step, magnitude, "extracted tick magnitude");
        magnitude
    }

    /// Returns the label format for ticks spaced `step` apart.
    #[must_use]
    pub fn format(&self, step: f64) -> LabelFormat {
        LabelFormat::for_step(step)
    }

    /// Renders `value` in compact scientific notation.
    ///
    /// See [`compact_exponential`](crate::compact_exponential).
    #[must_use]
    pub fn compact_exponential(&self, value: f64) -> String {
        format::compact_exponential(value)
    }

    /// Builds the shared label prefix for `offset` and `magnitude`.
    ///
    /// See [`prefix`](crate::prefix).
    #[must_use]
    pub fn prefix(&self, offset: f64, magnitude: f64) -> String {
        format::prefix(offset, magnitude)
    }

    /// Computes ticks, prefix and labels for the interval `[a, b)`.
    ///
    /// The offset is derived from the first two ticks and the magnitude from
    /// the shifted first and last ticks. Labels are the shifted and scaled
    /// ticks rendered with [`Ticker::format`] of the scaled spacing.
    pub fn generate(&self, a: f64, b: f64) -> Result<TickLabels, TickError> {
        let (ticks, step) = self.ticks_with_step(a, b)?;
        let offset = self.offset_with_step(ticks[0], step);
        let first = ticks[0] - offset;
        let last = ticks[ticks.len() - 1] - offset;
        let magnitude = self.magnitude(first, last, step);
        let label_format = self.format(step / magnitude);
        let labels = ticks
            .iter()
            .map(|tick| format::fix_minus(&label_format.apply((tick - offset) / magnitude)))
            .collect();
        Ok(TickLabels {
            prefix: self.prefix(offset, magnitude),
            ticks,
            labels,
            offset,
            magnitude,
            step,
        })
    }

    fn precision(&self) -> i32 {
        i32::try_from(self.config.precision).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn ticker(min_ticks: u32) -> Ticker {
        Ticker::new(TickerConfig::default().with_min_ticks(min_ticks)).unwrap()
    }

    #[test]
    fn step_is_round_and_fits() {
        let t = ticker(2);
        assert_eq!(t.step(1.0).unwrap(), 0.5);
        assert_eq!(t.step(10.0).unwrap(), 5.0);
        assert_eq!(t.step(3.0).unwrap(), 1.0);
        assert_eq!(t.step(4.0).unwrap(), 2.0);
        let t = ticker(3);
        assert_eq!(t.step(1.0).unwrap(), 0.2);
    }

    #[test]
    fn step_rejects_bad_widths() {
        let t = Ticker::default();
        assert_eq!(t.step(0.0), Err(TickError::InvalidWidth { width: 0.0 }));
        assert_eq!(t.step(-1.0), Err(TickError::InvalidWidth { width: -1.0 }));
        assert!(t.step(f64::NAN).is_err());
        assert!(t.step(f64::INFINITY).is_err());
    }

    #[test]
    fn unit_interval() {
        let t = ticker(2);
        assert_eq!(t.ticks(0.0, 1.0).unwrap(), [0.0, 0.5]);
        assert_eq!(t.ticks(1.0, 2.0).unwrap(), [1.0, 1.5]);
    }

    #[test]
    fn start_is_never_negative_zero() {
        let t = ticker(2);
        let ticks = t.ticks(-0.25, 1.0).unwrap();
        assert_eq!(ticks[0], 0.0);
        assert!(ticks[0].is_sign_positive());
    }

    #[test]
    fn domain_errors() {
        let t = Ticker::default();
        assert_eq!(
            t.ticks(1.0, 1.0),
            Err(TickError::EmptyInterval { a: 1.0, b: 1.0 })
        );
        assert_eq!(
            t.ticks(2.0, 1.0),
            Err(TickError::EmptyInterval { a: 2.0, b: 1.0 })
        );
        assert!(matches!(
            t.ticks(f64::NAN, 1.0),
            Err(TickError::NonFinite { .. })
        ));
        assert!(matches!(
            t.ticks(0.0, f64::INFINITY),
            Err(TickError::NonFinite { .. })
        ));
        assert_eq!(
            t.ticks(-f64::MAX, f64::MAX),
            Err(TickError::Unrepresentable {
                a: -f64::MAX,
                b: f64::MAX
            })
        );
    }

    #[test]
    fn collapsed_interval_is_unrepresentable() {
        let t = Ticker::default();
        let a = 1e17;
        let b = a + 64.0;
        // Spacing far below the float resolution at 1e17 cannot give 3 ticks.
        assert!(t.ticks(a, libm::nextafter(a, b)).is_err());
    }

    #[test]
    fn widest_intervals_reach_but_never_exceed_max_ticks() {
        let t = ticker(2);
        let max = t.config().max_ticks();
        assert_eq!(max, 5);
        for (a, b) in [
            (0.0, 0.999_99),
            (0.1, 1.099_99),
            (-0.5, 0.499_99),
            (1e6, 1e6 + 0.999_99),
        ] {
            assert_eq!(t.ticks(a, b).unwrap().len(), max, "({a}, {b})");
        }
    }

    #[test]
    fn offset_only_for_large_dynamic_range() {
        let t = Ticker::default();
        assert_eq!(t.offset(0.0, 0.1), 0.0);
        assert_eq!(t.offset(1.0, 1.5), 0.0);
        assert_eq!(t.offset(1000.0001, 1000.00012), 1000.0);
        assert_eq!(t.offset(-5.5, -5.0), 0.0);
    }

    #[test]
    fn offset_is_at_most_first_tick() {
        let t = Ticker::default();
        let first = -1_234_567.891_232;
        let offset = t.offset(first, first + 2e-6);
        assert!(offset <= first);
        assert!(first - offset < 1e-4 + 1e-9);
    }

    #[test]
    fn magnitude_keeps_normal_numbers() {
        let t = Ticker::default();
        assert_eq!(t.magnitude(0.0, 0.5, 0.5), 1.0);
        assert_eq!(t.magnitude(-99.0, 10.0, 1.0), 1.0);
        assert_eq!(t.magnitude(1e3, 2e3, 500.0), 1e3);
        assert_eq!(t.magnitude(1e-9, 1.05e-9, 5e-11), 1e-9);
        assert_eq!(t.magnitude(0.009_99, 0.010_24, 1e-5), 1e-2);
    }

    #[test]
    fn generate_plain_labels() {
        let t = ticker(2);
        let out = t.generate(-1.0, 1.0).unwrap();
        assert_eq!(out.ticks, [-1.0, 0.0]);
        assert_eq!(out.prefix, "");
        assert_eq!(out.labels, ["\u{2212}1", "0"]);
        assert_eq!(out.len(), 2);
        let pairs: Vec<_> = out.iter().collect();
        assert_eq!(pairs[1], (0.0, "0"));
    }

    #[test]
    fn generate_tiny_interval_uses_magnitude() {
        let t = ticker(2);
        let out = t.generate(1e-9, 1.1e-9).unwrap();
        assert_eq!(out.offset, 0.0);
        assert_eq!(out.magnitude, 1e-9);
        assert_eq!(out.prefix, "1e\u{2212}9 \u{d7} ");
        for label in &out.labels {
            assert!(label.len() <= 4, "label {label} too long");
        }
    }
}
