// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Keyframes: piecewise-linear curves for UI motion.
//!
//! This crate maps a normalized progress value (typically a scroll progress from
//! `vantage_scroll` or a time fraction from `vantage_timing`) to an output value
//! such as a vertical offset in pixels or an opacity.
//!
//! The core type is [`Keyframes`], an ordered list of `(input, output)` pairs
//! defining a piecewise-linear function:
//! - Curves are validated **once**, when they are built. Evaluation never fails.
//! - Progress is clamped to `[0, 1]` before lookup; inputs outside the curve's
//!   first/last keyframe return the boundary output (no extrapolation).
//! - Up to four keyframes are stored inline, so per-frame evaluation is
//!   allocation-free.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_keyframes::Keyframes;
//!
//! // Parallax offset: +100px when the card enters, -100px when it leaves.
//! let offset = Keyframes::new([(0.0, 100.0), (1.0, -100.0)]).unwrap();
//! assert_eq!(offset.evaluate(0.0), 100.0);
//! assert_eq!(offset.evaluate(0.5), 0.0);
//! assert_eq!(offset.evaluate(1.0), -100.0);
//!
//! // Fade in over the first 20%, hold, fade out over the last 20%.
//! let opacity = Keyframes::default_opacity();
//! assert!((opacity.evaluate(0.1) - 0.5).abs() < 1e-9);
//! assert_eq!(opacity.evaluate(0.5), 1.0);
//! ```
//!
//! ## Degenerate curves
//!
//! A curve with fewer than two keyframes, decreasing inputs, or non-finite
//! values is rejected with a [`CurveError`]. Integrators that must keep content
//! visible regardless can use [`Keyframes::or_constant`], which substitutes a
//! flat curve and hands back the error for reporting:
//!
//! ```rust
//! use vantage_keyframes::{CurveError, Keyframes};
//!
//! let (curve, err) = Keyframes::or_constant([(0.0, 1.0)], 1.0);
//! assert_eq!(err, Some(CurveError::TooFewKeyframes { len: 1 }));
//! assert_eq!(curve.evaluate(0.7), 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod easing;

pub use curve::{CurveError, Keyframe, Keyframes};
pub use easing::Easing;
