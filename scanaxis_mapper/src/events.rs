// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::transform::AxisTransform;

/// Change notification sent to listeners after a mutating operation.
///
/// Only values that actually changed are reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapperEvent {
    /// The real value of the lower handle changed.
    MinChanged(f64),
    /// The real value of the upper handle changed.
    MaxChanged(f64),
    /// The number of scan points changed.
    NumPointsChanged(u32),
    /// A new transform was installed.
    TransformChanged(AxisTransform),
}

impl fmt::Display for MapperEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinChanged(v) => write!(f, "min: {v}"),
            Self::MaxChanged(v) => write!(f, "max: {v}"),
            Self::NumPointsChanged(n) => write!(f, "points: {n}"),
            Self::TransformChanged(t) => {
                write!(f, "transform: scale {}, translate {}", t.scale(), t.translate())
            }
        }
    }
}

/// Handle returned by [`AxisMapper::subscribe`](crate::AxisMapper::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}
