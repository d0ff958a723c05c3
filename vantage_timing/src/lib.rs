// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Timing: host-clocked UI animations.
//!
//! Everything here is driven by timestamps the host passes in; the crate owns no
//! clock and no timer. Timestamps are [`Duration`](core::time::Duration)s since
//! any fixed, monotonic origin the host likes (for example, page load).
//!
//! - [`Marquee`] / [`MarqueeTask`]: an endless, linear horizontal translation of a
//!   repeated strip of content (the testimonial belt). Tasks are cancelable and
//!   restartable; a cancelled task produces no more offsets.
//! - [`Tween`]: a delayed, eased interpolation between two values.
//! - [`Stagger`] and [`Entrance`]: per-index delays and the fade/slide-in used
//!   when a card is first revealed.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use vantage_timing::Marquee;
//!
//! let belt = Marquee::default(); // -2000px every 30s, three copies
//! let mut task = belt.start(Duration::from_secs(10));
//!
//! assert_eq!(task.offset(Duration::from_secs(10)), Some(0.0));
//! assert_eq!(task.offset(Duration::from_secs(25)), Some(-1000.0));
//! // Loops after one period.
//! assert_eq!(task.offset(Duration::from_secs(40)), Some(0.0));
//!
//! task.cancel();
//! assert_eq!(task.offset(Duration::from_secs(41)), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod entrance;
mod marquee;

pub use entrance::{Entrance, EntranceFrame, Stagger, Tween};
pub use marquee::{Marquee, MarqueeTask};
