// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Carousel: circular navigation state for detail overlays.
//!
//! A [`Carousel`] owns a fixed, ordered list of items plus two pieces of state:
//! - the **selected** index, always valid for a non-empty list, and kept while
//!   the overlay is closed so that reopening resumes where the user left off;
//! - the **open** flag, true only between an explicit [`Carousel::open`] and the
//!   next [`Carousel::close`].
//!
//! While open, [`Carousel::next`] and [`Carousel::prev`] step through the list
//! with circular wraparound. The crate knows nothing about rendering: callers
//! read [`Carousel::active`] to decide what, if anything, the overlay shows, and
//! may compare [`Carousel::revision`] values to skip redundant re-renders.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_carousel::Carousel;
//!
//! let mut faq = Carousel::new(vec!["visa", "study", "work", "settle"]);
//! assert!(!faq.is_open());
//!
//! faq.open(2).unwrap();
//! assert_eq!(faq.active(), Some((2, &"work")));
//! assert_eq!(faq.next(), Some(3));
//! assert_eq!(faq.next(), Some(0)); // wraps
//! assert_eq!(faq.prev(), Some(3));
//!
//! faq.close();
//! assert_eq!(faq.active(), None);
//! assert_eq!(faq.selected(), 3); // remembered for the next open
//! ```
//!
//! ## Errors
//!
//! Opening an empty carousel or an out-of-range index returns a
//! [`CarouselError`] and leaves the state untouched. These are caller errors,
//! never fatal: higher layers typically log them and carry on.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod command;

pub use carousel::{Carousel, CarouselError};
pub use command::Command;
