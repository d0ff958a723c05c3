// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Section: scroll-linked cards plus a circular detail overlay.
//!
//! A content section (services, destinations, FAQs...) is a list of items
//! rendered as cards. This crate provides the [`Section`] controller that ties
//! together the other Vantage crates for one such list:
//!
//! - Each mounted card gets its own `vantage_scroll` observer; on every scroll
//!   the section evaluates that card's `vantage_keyframes` curves and returns a
//!   [`CardFrame`] with the offset and opacity to apply.
//! - One `vantage_carousel` [`Carousel`](vantage_carousel::Carousel) backs the
//!   detail overlay: clicking a card opens it, next/previous step through the
//!   items with wraparound, and close or a backdrop click dismisses it.
//! - Cards are revealed once when enough of them is visible, and can play a
//!   staggered `vantage_timing` entrance.
//!
//! The section does not render anything. Hosts forward geometry and input
//! events, and apply the returned frames and overlay state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vantage_section::{OverlayTarget, Section, SectionConfig};
//!
//! let items = vec!["Student visas", "Work permits", "Permanent residency"];
//! let mut section = Section::new(items, &SectionConfig::default());
//!
//! // Mount the cards where layout placed them.
//! for (i, top) in [1000.0, 1400.0, 1800.0].into_iter().enumerate() {
//!     section.mount_card(i, Rect::new(0.0, top, 400.0, top + 300.0));
//! }
//!
//! // Scroll: the first card is 50% through its window, at rest and opaque.
//! let frames = section.on_scroll(Rect::new(0.0, 800.0, 1280.0, 1500.0));
//! let first = frames.iter().find(|f| f.index == 0).unwrap();
//! assert_eq!(first.offset_y, 0.0);
//! assert_eq!(first.opacity, 1.0);
//!
//! // Open the detail overlay and page through it.
//! section.on_card_click(2);
//! section.on_next();
//! assert_eq!(section.overlay().unwrap().item, &"Student visas");
//!
//! // Clicks inside the content keep it open; the backdrop closes it.
//! section.on_overlay_click(OverlayTarget::Content);
//! assert!(section.is_open());
//! section.on_overlay_click(OverlayTarget::Backdrop);
//! assert!(!section.is_open());
//! ```
//!
//! ## Failure modes
//!
//! Nothing here hides content. Invalid curves degrade to static cards (offset
//! `0`, opacity `1`) and are listed by [`Section::config_errors`]; invalid
//! clicks are logged with `tracing` and ignored.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod motion;
mod overlay;
mod section;

pub use config::{Cascade, ConfigError, MotionProperty, SectionConfig};
pub use motion::CardMotion;
pub use overlay::{Key, Overlay, OverlayTarget};
pub use section::{CardFrame, Section};
