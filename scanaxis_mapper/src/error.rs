// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the axis mapper.

use thiserror::Error;

/// Error returned by transform construction and mapper operations.
///
/// These only arise from misuse by the caller (a zero-width viewport, an
/// inverted fit span, a NaN from upstream). The mapper never guesses a
/// replacement transform; on error its state is left unchanged.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum MapperError {
    /// The viewport width is zero, negative or not finite.
    #[error("viewport width {width} is not a positive finite number")]
    InvalidViewport {
        /// Width as given.
        width: f64,
    },
    /// The requested scale is zero, negative or not finite.
    #[error("scale {scale} is not a positive finite number")]
    InvalidScale {
        /// Scale as given.
        scale: f64,
    },
    /// A zoom factor is zero, negative or not finite.
    #[error("zoom factor {factor} is not a positive finite number")]
    InvalidFactor {
        /// Factor as given.
        factor: f64,
    },
    /// A span to fit is empty, inverted or has a non-finite bound.
    #[error("cannot fit the span [{min}, {max}]")]
    DegenerateSpan {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// A real value or pixel coordinate is `NaN` or infinite.
    #[error("value is not finite")]
    NonFinite,
    /// A scan needs at least two points, one at each handle.
    #[error("number of scan points must be at least 2")]
    InvalidPointCount,
    /// A [`MapperConfig`](crate::MapperConfig) field is out of range.
    #[error("invalid mapper configuration: {0}")]
    InvalidConfig(&'static str),
}
