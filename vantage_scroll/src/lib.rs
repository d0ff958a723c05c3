// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Scroll: headless scroll-progress observers.
//!
//! This crate answers one question for many elements at once: *how far has this
//! element travelled through the viewport?* It does not own a scene, a layout
//! engine or an event loop. Callers are expected to:
//! - Register each element's page-space bounds with [`ScrollTracker::observe`]
//!   when it mounts, and deregister it with [`ScrollTracker::unobserve`] when it
//!   unmounts.
//! - Forward scroll and resize events as [`ScrollTracker::set_viewport`], and
//!   layout shifts as [`ScrollTracker::set_bounds`].
//! - Call [`ScrollTracker::update`] once per event turn and apply the returned
//!   [`Progress`] values (usually through a `vantage_keyframes` curve).
//!
//! Page space has `y` growing downward; the viewport rectangle is the visible
//! region of the page, so scrolling moves it rather than the elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vantage_scroll::ScrollTracker;
//!
//! // 800px tall viewport at the top of the page.
//! let mut tracker = ScrollTracker::new(Rect::new(0.0, 0.0, 1200.0, 800.0));
//!
//! // A 200px card whose top sits exactly on the fold.
//! let card = tracker.observe(Rect::new(0.0, 800.0, 400.0, 1000.0));
//! assert_eq!(tracker.progress(card).unwrap().value(), 0.0);
//!
//! // Scroll down by 300px: the card is 30% through its 1000px window.
//! tracker.set_viewport(Rect::new(0.0, 300.0, 1200.0, 1100.0));
//! let changes = tracker.update();
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes[0].0, card);
//! assert_eq!(changes[0].1.value(), 0.3);
//!
//! // Unmount: the handle becomes stale and nothing more is reported for it.
//! assert!(tracker.unobserve(card));
//! tracker.set_viewport(Rect::new(0.0, 900.0, 1200.0, 1700.0));
//! assert!(tracker.update().is_empty());
//! ```
//!
//! ## Progress windows
//!
//! By default progress runs from `0` when the element's top edge meets the
//! viewport's bottom edge to `1` when the element's bottom edge meets the
//! viewport's top edge:
//!
//! `progress = (viewport.y1 - bounds.y0) / (viewport.height() + bounds.height())`
//!
//! Other windows are available through [`ScrollWindow`]. Progress is **not**
//! clamped here; consumers clamp at evaluation time.
//!
//! ## Reveal-once visibility
//!
//! [`visible_fraction`] and [`RevealLatch`] implement "animate in the first time
//! at least 10% of the element is visible" entrance triggers.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod reveal;
mod tracker;
mod window;

pub use reveal::{RevealLatch, visible_fraction};
pub use tracker::{ObserverId, ScrollTracker};
pub use window::{Edge, Progress, ScrollWindow};
