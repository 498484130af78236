// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tick generation.

use thiserror::Error;

/// Error returned when an interval cannot be ticked.
///
/// All variants are domain errors: the caller handed in an interval that is
/// already inconsistent, so nothing is clamped or guessed.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum TickError {
    /// One of the interval bounds is `NaN` or infinite.
    #[error("interval [{a}, {b}) has a non-finite bound")]
    NonFinite {
        /// Lower bound as given.
        a: f64,
        /// Upper bound as given.
        b: f64,
    },
    /// The interval is empty or inverted (`a >= b`).
    #[error("interval [{a}, {b}) is empty or inverted")]
    EmptyInterval {
        /// Lower bound as given.
        a: f64,
        /// Upper bound as given.
        b: f64,
    },
    /// The interval width is zero, negative or not finite.
    #[error("interval width {width} is not a positive finite number")]
    InvalidWidth {
        /// Width as given.
        width: f64,
    },
    /// The interval is finite but its ticks cannot be represented in `f64`.
    ///
    /// This happens when the width overflows, when the step underflows, or
    /// when the interval is so narrow relative to its position that
    /// consecutive ticks collapse onto the same float.
    #[error("ticks for interval [{a}, {b}) are not representable")]
    Unrepresentable {
        /// Lower bound as given.
        a: f64,
        /// Upper bound as given.
        b: f64,
    },
}

/// Error returned when a [`TickerConfig`](crate::TickerConfig) is invalid.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// At least two ticks are needed to derive a spacing.
    #[error("min_ticks must be at least 2, got {0}")]
    TooFewTicks(u32),
    /// Labels need at least one significant digit.
    #[error("precision must be at least 1")]
    ZeroPrecision,
    /// The numeric base must be at least 2.
    #[error("base must be at least 2, got {0}")]
    InvalidBase(u32),
    /// The step multiplier list is empty.
    #[error("at least one step multiplier is required")]
    NoSteps,
    /// A step multiplier is not a positive finite number.
    #[error("step multiplier at index {0} is not positive and finite")]
    InvalidStep(usize),
    /// Step multipliers must be strictly descending.
    #[error("step multipliers must be strictly descending (index {0})")]
    UnorderedSteps(usize),
    /// Without a multiplier `<= 1` a fitting step is not guaranteed.
    #[error("the smallest step multiplier must be at most 1")]
    NoUnitStep,
}
