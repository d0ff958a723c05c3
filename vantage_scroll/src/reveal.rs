// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility fractions and reveal-once latches for entrance animations.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use vantage_scroll::{RevealLatch, visible_fraction};
//!
//! let card = Rect::new(0.0, 750.0, 300.0, 1250.0);
//! let mut latch = RevealLatch::default();
//!
//! // 50px of a 500px card is visible: exactly the 10% default threshold.
//! let fraction = visible_fraction(card, Rect::new(0.0, 0.0, 1000.0, 800.0));
//! assert!(latch.update(fraction));
//!
//! // Scrolling away again does not hide it.
//! assert!(!latch.update(0.0));
//! assert!(latch.is_revealed());
//! ```

use kurbo::Rect;

/// Share of `bounds`' height that lies inside `viewport`, in `[0, 1]`.
///
/// Zero-height elements report `0`. Both rectangles are normalized first.
#[must_use]
pub fn visible_fraction(bounds: Rect, viewport: Rect) -> f64 {
    let bounds = bounds.abs();
    let viewport = viewport.abs();
    let height = bounds.height();
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = bounds.y1.min(viewport.y1) - bounds.y0.max(viewport.y0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Latches to "revealed" the first time enough of an element is visible.
///
/// Once revealed, the latch never resets on its own; entrance animations play
/// once per mount. Call [`RevealLatch::reset`] on remount.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    /// The default threshold: 10% of the element visible.
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Creates an unrevealed latch with the given threshold.
    ///
    /// The threshold is clamped to `[0, 1]`; NaN falls back to the default.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            Self::DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    /// Returns the visibility threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` once the latch has fired.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds a visibility fraction; returns `true` only on the transition.
    ///
    /// An element must be at least partly visible to reveal, even with a zero
    /// threshold.
    pub fn update(&mut self, fraction: f64) -> bool {
        if self.revealed || fraction <= 0.0 || fraction < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Re-arms the latch.
    pub fn reset(&mut self) {
        self.revealed = false;
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
