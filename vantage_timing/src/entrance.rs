// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delayed tweens and staggered entrance animations.

use core::time::Duration;

use vantage_keyframes::Easing;

/// A delayed, eased interpolation from `from` to `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Tween {
    /// Value before and at the start of the tween.
    pub from: f64,
    /// Value at and after the end of the tween.
    pub to: f64,
    /// Time to hold `from` before moving.
    pub delay: Duration,
    /// Time spent moving from `from` to `to`.
    pub duration: Duration,
    /// Shape of the motion.
    pub easing: Easing,
}

impl Tween {
    /// A linear tween with no delay.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration,
            easing: Easing::Linear,
        }
    }

    /// Returns this tween with a different delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns this tween with a different easing.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]` after `elapsed` time since the trigger.
    #[must_use]
    pub fn fraction(&self, elapsed: Duration) -> f64 {
        let Some(moving) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (moving.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value after `elapsed` time since the trigger.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f64 {
        let t = self.easing.apply(self.fraction(elapsed));
        self.from + (self.to - self.from) * t
    }

    /// Returns `true` once the tween has reached `to`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay.saturating_add(self.duration)
    }
}

/// Per-index delays: `base + step * index`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Stagger {
    /// Delay of the first item.
    pub base: Duration,
    /// Additional delay per index.
    pub step: Duration,
}

impl Stagger {
    /// Creates a stagger.
    #[must_use]
    pub const fn new(base: Duration, step: Duration) -> Self {
        Self { base, step }
    }

    /// Delay for the item at `index`, saturating on overflow.
    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }
}

/// Offset and opacity of a card during its entrance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntranceFrame {
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A fade-and-slide entrance played once an element is revealed.
///
/// Each element starts `rise` pixels below its resting place and transparent,
/// and settles over `duration` after a staggered delay.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Entrance {
    /// Initial downward offset in pixels.
    pub rise: f64,
    /// Time each element spends settling.
    pub duration: Duration,
    /// Per-index start delays.
    pub stagger: Stagger,
    /// Shape of the motion.
    pub easing: Easing,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            rise: 50.0,
            duration: Duration::from_millis(500),
            stagger: Stagger::new(Duration::ZERO, Duration::from_millis(200)),
            easing: Easing::EaseOut,
        }
    }
}

impl Entrance {
    fn tween(&self, index: usize, from: f64, to: f64) -> Tween {
        Tween::new(from, to, self.duration)
            .with_delay(self.stagger.delay(index))
            .with_easing(self.easing)
    }

    /// Frame for element `index`, `elapsed` time after it was revealed.
    #[must_use]
    pub fn sample(&self, index: usize, elapsed: Duration) -> EntranceFrame {
        EntranceFrame {
            offset_y: self.tween(index, self.rise, 0.0).sample(elapsed),
            opacity: self.tween(index, 0.0, 1.0).sample(elapsed),
        }
    }

    /// Returns `true` once element `index` has settled.
    #[must_use]
    pub fn is_finished(&self, index: usize, elapsed: Duration) -> bool {
        self.tween(index, 0.0, 1.0).is_finished(elapsed)
    }
}
