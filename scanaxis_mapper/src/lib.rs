// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scanaxis_mapper --heading-base-level=0

//! Scanaxis Mapper: real/pixel/slider-range mapping for a scan-range axis.
//!
//! A scan-range widget lets the user drag two handles along an axis to pick
//! a real interval (a frequency sweep, a voltage ramp) and a number of scan
//! points. The slider itself only knows integer positions; this crate keeps
//! the two in sync:
//! - [`AxisTransform`]: an immutable `pixel = real * scale + translate` value,
//!   always built through [`recenter_transform`].
//! - [`SliderHost`]: the slider's integer range bounds, groove geometry and
//!   viewport width, queried on demand.
//! - [`AxisMapper`]: owns the transform and the handle values, and
//!   implements anchored zoom, pan, resize and fitting. Handle values never
//!   change under zoom; only their pixel/range positions do.
//!
//! Zooming is clamped by [`MapperConfig`] span limits, so the reals at both
//! ends of the groove stay distinct no matter how far the user zooms in.
//!
//! ## Example
//!
//! ```rust
//! use scanaxis_mapper::{AxisMapper, FixedSlider};
//!
//! let mut mapper = AxisMapper::new(FixedSlider::new((0, 1000), 800.0));
//! // First layout pass: no previous size.
//! mapper.on_resize(0.0, 800.0).unwrap();
//! mapper.zoom_to_fit(10.0, 20.0).unwrap();
//!
//! // The handle span covers the middle third of the viewport.
//! let (lo, hi) = mapper.handle_positions();
//! assert!((lo - 333).abs() <= 1 && (hi - 667).abs() <= 1);
//!
//! // Zooming changes positions but not values.
//! mapper.zoom(2.0, 400.0).unwrap();
//! assert_eq!(mapper.handles(), (10.0, 20.0));
//! ```
//!
//! Listeners are plain closures:
//!
//! ```rust
//! use scanaxis_mapper::{AxisMapper, FixedSlider, MapperEvent};
//!
//! let mut mapper = AxisMapper::new(FixedSlider::new((0, 100), 300.0));
//! mapper.subscribe(|event| {
//!     if let MapperEvent::MinChanged(v) = event {
//!         assert_eq!(*v, -1.5);
//!     }
//! });
//! mapper.set_min(-1.5).unwrap();
//! ```
//!
//! The crate is single-threaded and synchronous. This crate is `no_std` and
//! uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod events;
mod host;
mod mapper;
mod transform;

pub use config::MapperConfig;
pub use error::MapperError;
pub use events::{ListenerId, MapperEvent};
pub use host::{FixedSlider, SliderHost};
pub use mapper::{AxisMapper, DEFAULT_NUM_POINTS};
pub use transform::{AxisTransform, recenter_transform};
