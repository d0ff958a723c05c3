// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll windows: which two element/viewport intersections define progress.

use kurbo::Rect;

/// Normalized progress of an element through its [`ScrollWindow`].
///
/// `0` is the start intersection, `1` the end intersection. Values slightly
/// outside `[0, 1]` are expected while an element is outside its window; use
/// [`Progress::clamped`] or clamp at evaluation time.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Wraps a raw progress value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw, unclamped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the value clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> f64 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0.clamp(0.0, 1.0)
        }
    }

    /// Returns `true` if the raw value lies within `[0, 1]`.
    #[must_use]
    pub fn is_within_window(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

/// One intersection between an element edge and a viewport edge.
///
/// Both fields are fractions along the scroll axis: `0.0` is the start (top)
/// edge and `1.0` the end (bottom) edge. `Edge { element: 0.0, viewport: 1.0 }`
/// reads "the element's start meets the viewport's end".
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Edge {
    /// Fraction along the element.
    pub element: f64,
    /// Fraction along the viewport.
    pub viewport: f64,
}

impl Edge {
    /// Creates an intersection from element and viewport fractions.
    #[must_use]
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset (viewport top) at which this intersection occurs.
    fn scroll_offset(self, bounds: Rect, viewport_height: f64) -> f64 {
        bounds.y0 + self.element * bounds.height() - self.viewport * viewport_height
    }
}

/// The pair of intersections that bound a progress window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ScrollWindow {
    /// Intersection at which progress is `0`.
    pub start: Edge,
    /// Intersection at which progress is `1`.
    pub end: Edge,
}

impl ScrollWindow {
    /// From first pixel entering at the bottom to last pixel leaving at the top.
    pub const ENTER_EXIT: Self = Self {
        start: Edge::new(0.0, 1.0),
        end: Edge::new(1.0, 0.0),
    };

    /// From first pixel entering at the bottom to the element being fully in view.
    pub const ENTER: Self = Self {
        start: Edge::new(0.0, 1.0),
        end: Edge::new(1.0, 1.0),
    };

    /// From the element touching the top edge to it having fully left.
    pub const EXIT: Self = Self {
        start: Edge::new(0.0, 0.0),
        end: Edge::new(1.0, 0.0),
    };

    /// Computes the progress of `bounds` through this window for `viewport`.
    ///
    /// Both rectangles are in page space and are normalized first. A window of
    /// zero length yields `0` before its start intersection and `1` from it on.
    #[must_use]
    pub fn progress(&self, bounds: Rect, viewport: Rect) -> Progress {
        let bounds = bounds.abs();
        let viewport = viewport.abs();
        let scroll = viewport.y0;
        let from = self.start.scroll_offset(bounds, viewport.height());
        let to = self.end.scroll_offset(bounds, viewport.height());
        let span = to - from;
        if span == 0.0 {
            return Progress(if scroll < from { 0.0 } else { 1.0 });
        }
        Progress((scroll - from) / span)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::ENTER_EXIT
    }
}
