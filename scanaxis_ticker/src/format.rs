// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label and prefix formatting.

use alloc::format;
use alloc::string::String;

use crate::math::{floor_log, powi};

/// Typographic minus sign (U+2212) used in place of ASCII `-`.
pub const MINUS: char = '\u{2212}';

/// Multiplication sign (U+00D7) used between the magnitude and the label.
pub const TIMES: char = '\u{00d7}';

/// Decimals tried past the leading digit of a step before giving up on an
/// exact rendering. An `f64` never needs more than 17 significant digits.
const MAX_EXTRA_DECIMALS: i32 = 17;

/// Fixed-point format for tick labels.
///
/// Produced by [`Ticker::format`](crate::Ticker::format) from the (scaled)
/// tick spacing, so that every label carries exactly as many decimals as
/// needed to tell neighbouring ticks apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelFormat {
    decimals: usize,
}

impl LabelFormat {
    /// Creates a format with the given number of decimals.
    #[must_use]
    pub const fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Derives the number of decimals needed to represent multiples of
    /// `step` exactly.
    ///
    /// This starts at the position of the step's leading digit and adds
    /// decimals until the step itself renders without rounding, so `0.2`
    /// gets one decimal and a binary step like `0.0625` gets four.
    #[must_use]
    pub fn for_step(step: f64) -> Self {
        if !(step.is_finite() && step > 0.0) {
            return Self::new(0);
        }
        let lead = floor_log(step, 10.0).saturating_neg().max(0);
        let mut decimals = lead;
        while decimals < lead + MAX_EXTRA_DECIMALS {
            let scaled = step * powi(10.0, decimals);
            if (scaled - libm::round(scaled)).abs() <= 16.0 * f64::EPSILON * scaled {
                break;
            }
            decimals += 1;
        }
        Self {
            decimals: usize::try_from(decimals).unwrap_or_default(),
        }
    }

    /// Number of decimals after the point.
    #[must_use]
    pub const fn decimals(&self) -> usize {
        self.decimals
    }

    /// Renders `value` with this format, using an ASCII minus.
    ///
    /// A value that rounds to zero is never rendered with a sign.
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        let text = format!("{:.*}", self.decimals, value);
        match text.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => String::from(rest),
            _ => text,
        }
    }
}

/// Replaces every ASCII `-` with a typographic minus.
#[must_use]
pub fn fix_minus(text: &str) -> String {
    text.replace('-', "\u{2212}")
}

/// Renders `value` in compact scientific notation.
///
/// The mantissa uses the shortest digits that round-trip to the same float,
/// with no trailing zeros, no `+` and no zero-padded exponent: `1.5e−3`,
/// `1e6`, `−2.25e10`.
///
/// ```
/// use scanaxis_ticker::compact_exponential;
///
/// assert_eq!(compact_exponential(0.0015), "1.5e\u{2212}3");
/// assert_eq!(compact_exponential(1e6), "1e6");
/// ```
#[must_use]
pub fn compact_exponential(value: f64) -> String {
    fix_minus(&format!("{value:e}"))
}

/// Builds the shared `"offset + magnitude × "` prefix.
///
/// Either term is omitted when it is the identity (`0` and `1`
/// respectively), so ticks that need neither get an empty prefix.
#[must_use]
pub fn prefix(offset: f64, magnitude: f64) -> String {
    let mut out = String::new();
    if offset != 0.0 {
        out.push_str(&compact_exponential(offset));
        out.push_str(" + ");
    }
    if magnitude != 1.0 {
        out.push_str(&compact_exponential(magnitude));
        out.push(' ');
        out.push(TIMES);
        out.push(' ');
    }
    out
}
