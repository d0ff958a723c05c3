// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// An endless, linear translation of repeated content.
///
/// The content is rendered `copies` times back to back and translated by
/// `distance` over each `period`, then jumps back and repeats. The jump is
/// invisible as long as `|distance|` does not exceed the width of one copy;
/// that is an authoring constraint, checked by [`Marquee::covers_loop`] but not
/// enforced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Marquee {
    /// Horizontal translation per period, in pixels. Negative moves left.
    pub distance: f64,
    /// Duration of one loop.
    pub period: Duration,
    /// How many times the content is repeated.
    pub copies: usize,
}

impl Default for Marquee {
    fn default() -> Self {
        Self {
            distance: -2000.0,
            period: Duration::from_secs(30),
            copies: 3,
        }
    }
}

impl Marquee {
    /// Offset after `elapsed` time, in `[0, distance)` (or `(distance, 0]`).
    ///
    /// A zero period yields `0.0`.
    #[must_use]
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_nanos();
        if period == 0 {
            return 0.0;
        }
        let phase = elapsed.as_nanos() % period;
        let fraction = phase as f64 / period as f64;
        self.distance * fraction
    }

    /// Returns `true` if a loop never exposes the seam for copies of
    /// `copy_width` pixels.
    #[must_use]
    pub fn covers_loop(&self, copy_width: f64) -> bool {
        self.copies >= 2 && self.distance.abs() <= copy_width
    }

    /// Starts a running task at host time `now`.
    #[must_use]
    pub fn start(&self, now: Duration) -> MarqueeTask {
        MarqueeTask {
            marquee: self.clone(),
            started_at: now,
            running: true,
        }
    }
}

/// A started [`Marquee`], alive until cancelled.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeTask {
    marquee: Marquee,
    started_at: Duration,
    running: bool,
}

impl MarqueeTask {
    /// Returns the marquee settings.
    #[must_use]
    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    /// Returns `true` until [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Offset to apply at host time `now`, or `None` once cancelled.
    ///
    /// Times earlier than the start are treated as the start.
    #[must_use]
    pub fn offset(&self, now: Duration) -> Option<f64> {
        if !self.running {
            return None;
        }
        Some(self.marquee.offset_at(now.saturating_sub(self.started_at)))
    }

    /// Restarts from offset zero at host time `now`.
    pub fn restart(&mut self, now: Duration) {
        self.started_at = now;
        self.running = true;
    }

    /// Stops the task; later calls to [`offset`](Self::offset) return `None`.
    pub fn cancel(&mut self) {
        self.running = false;
    }
}
