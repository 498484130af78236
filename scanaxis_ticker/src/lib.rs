// Copyright 2025 the Scanaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=scanaxis_ticker --heading-base-level=0

//! Scanaxis Ticker: tick values and compact labels for a numeric axis.
//!
//! Given a half-open interval `[a, b)` and a minimum tick count, [`Ticker`]
//! produces:
//! - a "nice" tick sequence with a uniform, round step (`5`, `2`, `1` times a
//!   power of the base by default);
//! - an optional shared offset and magnitude, rendered once as a prefix such
//!   as `1.2345678e6 + 1e−5 × `, so labels only show the digits that change;
//! - one label per tick, pairwise distinct, that combine with the prefix to
//!   reproduce the tick value.
//!
//! The crate is headless. Callers paint the labels; the ticker only returns
//! numbers and strings.
//!
//! ## Example
//!
//! ```rust
//! use scanaxis_ticker::{Ticker, TickerConfig};
//!
//! let ticker = Ticker::new(TickerConfig::default().with_min_ticks(3)).unwrap();
//! let out = ticker.generate(1_234_567.891_23, 1_234_567.891_24).unwrap();
//!
//! // A common offset and magnitude were factored out...
//! assert!(out.offset != 0.0);
//! assert!(out.prefix.ends_with("\u{d7} "));
//! // ...so labels only carry the trailing digits.
//! assert!(out.labels.iter().all(|l| l.len() <= 4));
//! ```
//!
//! Invalid intervals are reported, never clamped:
//!
//! ```rust
//! use scanaxis_ticker::{TickError, Ticker};
//!
//! let ticker = Ticker::default();
//! assert_eq!(
//!     ticker.generate(1.0, 1.0),
//!     Err(TickError::EmptyInterval { a: 1.0, b: 1.0 })
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod format;
mod math;
mod ticker;

pub use config::{DEFAULT_STEPS, TickerConfig};
pub use error::{ConfigError, TickError};
pub use format::{LabelFormat, MINUS, TIMES, compact_exponential, fix_minus, prefix};
pub use ticker::{TickLabels, Ticker};
